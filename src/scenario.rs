use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{ConeParams, CylinderParams, GeometryError, RocketGeometry};

/// シナリオメタデータ
#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioMeta {
    pub version: String,
    pub name: String,
    pub description: String,
}

/// 円柱コンポーネントの設定セクション
///
/// 軸は記号の文字列として保持し、モデル構築時に検証されます。
/// 数値フィールドは検証されません（モデル側の仕様と同一）。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CylinderSection {
    pub axis: String,
    pub outer_radius_m: f64,
    pub inner_radius_m: f64,
    pub start_m: f64,
    pub end_m: f64,
}

/// 円錐コンポーネントの設定セクション
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConeSection {
    pub axis: String,
    pub bottom_radius_m: f64,
    pub top_radius_m: f64,
    pub start_m: f64,
    pub end_m: f64,
}

/// ターゲット形状の設定
///
/// 各コンポーネントは省略可能で、欠落はモデル組み立て時に
/// `MissingComponent` エラーとして報告されます。
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TargetConfig {
    pub main_body: Option<CylinderSection>,
    pub nose_cone: Option<ConeSection>,
    pub tail_section: Option<CylinderSection>,
}

/// 完全なシナリオ設定
#[derive(Debug, Deserialize, Serialize)]
pub struct GeometryScenario {
    pub meta: ScenarioMeta,
    #[serde(default)]
    pub target: TargetConfig,
}

impl CylinderSection {
    /// 設定セクションを検証済みの円柱パラメータへ変換
    pub fn to_params(&self) -> Result<CylinderParams, GeometryError> {
        CylinderParams::from_symbol(
            &self.axis,
            self.outer_radius_m,
            self.inner_radius_m,
            self.start_m,
            self.end_m,
        )
    }
}

impl ConeSection {
    /// 設定セクションを検証済みの円錐パラメータへ変換
    pub fn to_params(&self) -> Result<ConeParams, GeometryError> {
        ConeParams::from_symbol(
            &self.axis,
            self.bottom_radius_m,
            self.top_radius_m,
            self.start_m,
            self.end_m,
        )
    }
}

impl GeometryScenario {
    /// YAMLファイルからシナリオ設定を読み込み
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let path = path.as_ref();

        // ファイル存在チェック
        if !path.exists() {
            return Err(ScenarioError::FileNotFound(path.to_path_buf()));
        }

        // ファイル読み込み
        let contents = fs::read_to_string(path)
            .map_err(|e| ScenarioError::IoError(path.to_path_buf(), e))?;

        // YAML解析
        let scenario: GeometryScenario = serde_yaml::from_str(&contents)
            .map_err(|e| ScenarioError::ParseError(path.to_path_buf(), e))?;

        Ok(scenario)
    }

    /// 設定からターゲット形状モデルを組み立て
    ///
    /// 軸記号の検証と必須コンポーネントの欠落チェックはここで行われます。
    /// 半径や範囲の数値には検証を行いません。
    ///
    /// # 戻り値
    ///
    /// 検証済みのターゲット形状、構築できない場合はエラー
    pub fn build_target(&self) -> Result<RocketGeometry, ScenarioError> {
        let main_body = match &self.target.main_body {
            Some(section) => Some(section.to_params().map_err(ScenarioError::Geometry)?),
            None => None,
        };

        let nose_cone = match &self.target.nose_cone {
            Some(section) => Some(section.to_params().map_err(ScenarioError::Geometry)?),
            None => None,
        };

        let tail_section = match &self.target.tail_section {
            Some(section) => Some(section.to_params().map_err(ScenarioError::Geometry)?),
            None => None,
        };

        RocketGeometry::from_parts(main_body, nose_cone, tail_section)
            .map_err(ScenarioError::Geometry)
    }

    /// シナリオの概要を表示
    pub fn print_summary(&self) {
        println!("=== シナリオ情報 ===");
        println!("名前: {}", self.meta.name);
        println!("説明: {}", self.meta.description);
        println!("バージョン: {}", self.meta.version);
        println!();

        println!("=== ターゲット形状 ===");
        match &self.target.main_body {
            Some(body) => println!(
                "主胴体: {}軸沿い円柱 外半径 {:.2}m 内半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
                body.axis, body.outer_radius_m, body.inner_radius_m, body.start_m, body.end_m
            ),
            None => println!("主胴体: (未指定)"),
        }
        match &self.target.nose_cone {
            Some(cone) => println!(
                "ノーズコーン: {}軸沿い円錐 底面半径 {:.2}m 頂面半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
                cone.axis, cone.bottom_radius_m, cone.top_radius_m, cone.start_m, cone.end_m
            ),
            None => println!("ノーズコーン: (未指定)"),
        }
        match &self.target.tail_section {
            Some(tail) => println!(
                "尾部: {}軸沿い円柱 外半径 {:.2}m 内半径 {:.2}m 範囲 [{:.2}, {:.2}]m",
                tail.axis, tail.outer_radius_m, tail.inner_radius_m, tail.start_m, tail.end_m
            ),
            None => println!("尾部: (未指定)"),
        }
    }
}

/// シナリオ読み込みエラー
#[derive(Debug)]
pub enum ScenarioError {
    FileNotFound(std::path::PathBuf),
    IoError(std::path::PathBuf, std::io::Error),
    ParseError(std::path::PathBuf, serde_yaml::Error),
    Geometry(GeometryError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::FileNotFound(path) => {
                write!(f, "シナリオファイルが見つかりません: {}", path.display())
            }
            ScenarioError::IoError(path, err) => {
                write!(f, "ファイル読み込みエラー {}: {}", path.display(), err)
            }
            ScenarioError::ParseError(path, err) => {
                write!(f, "YAML解析エラー {}: {}", path.display(), err)
            }
            ScenarioError::Geometry(err) => {
                write!(f, "ターゲット形状の構築エラー: {}", err)
            }
        }
    }
}

impl std::error::Error for ScenarioError {}
