use crate::models::common::{Axis, GeometryError};
use crate::models::cone::ConeParams;
use crate::models::cylinder::CylinderParams;

/// ロケット弾ターゲットの外形形状モデル
///
/// 計測実験における「ターゲット」の外形を表す不変の集約で、
/// 主胴体（円柱）・ノーズコーン（円錐）・尾部（円柱）の3コンポーネントを
/// 値として所有します。一度構築された後は変更されません。
/// コンポーネント間の位置関係（例: ノーズコーンの開始位置と主胴体の
/// 終了位置の一致）は検証しません。
#[derive(Debug, Clone, PartialEq)]
pub struct RocketGeometry {
    /// 主胴体（円柱）
    pub main_body: CylinderParams,
    /// ノーズコーン（円錐）
    pub nose_cone: ConeParams,
    /// 尾部（円柱）
    pub tail_section: CylinderParams,
}

impl RocketGeometry {
    /// 3つのコンポーネントからロケット弾形状を作成します
    ///
    /// 構築済みのコンポーネントを受け取るため、この構築は失敗しません。
    /// コンポーネント間の相互検証は行いません。
    ///
    /// # 引数
    ///
    /// * `main_body` - 主胴体の円柱パラメータ
    /// * `nose_cone` - ノーズコーンの円錐パラメータ
    /// * `tail_section` - 尾部の円柱パラメータ
    pub fn new(
        main_body: CylinderParams,
        nose_cone: ConeParams,
        tail_section: CylinderParams,
    ) -> Self {
        Self {
            main_body,
            nose_cone,
            tail_section,
        }
    }

    /// 欠落し得るコンポーネント群からロケット弾形状を組み立てます
    ///
    /// シナリオ設定のセクションのように省略される可能性のある入力を
    /// 集約へ変換します。いずれかのコンポーネントが未指定の場合、
    /// 最初に見つかった欠落コンポーネントの名前を持つエラーを返します。
    ///
    /// # 引数
    ///
    /// * `main_body` - 主胴体の円柱パラメータ（必須）
    /// * `nose_cone` - ノーズコーンの円錐パラメータ（必須）
    /// * `tail_section` - 尾部の円柱パラメータ（必須）
    ///
    /// # 戻り値
    ///
    /// 組み立てられた形状、欠落がある場合は `GeometryError::MissingComponent`
    pub fn from_parts(
        main_body: Option<CylinderParams>,
        nose_cone: Option<ConeParams>,
        tail_section: Option<CylinderParams>,
    ) -> Result<Self, GeometryError> {
        let main_body = main_body.ok_or(GeometryError::MissingComponent("main_body"))?;
        let nose_cone = nose_cone.ok_or(GeometryError::MissingComponent("nose_cone"))?;
        let tail_section = tail_section.ok_or(GeometryError::MissingComponent("tail_section"))?;
        Ok(Self::new(main_body, nose_cone, tail_section))
    }

    /// 計測実験のパラメータセットに基づくデフォルト形状を構築します
    ///
    /// - 主胴体: Z軸沿いの円柱、外半径 0.25 m、内半径 0（中実）、Z範囲 0〜6.14 m
    /// - ノーズコーン: Z軸沿いの円錐、底面半径 0.25 m・頂面半径 0 m、
    ///   開始 Z 6.14 m、終端 6.64 m（錐長 0.5 m）
    /// - 尾部: X軸沿いの円柱、外半径 0.20 m、内半径 0、X範囲 0〜0.50 m
    ///
    /// この構築は常に成功し、呼び出しごとに新しい値を返します。
    pub fn experiment_defaults() -> Self {
        let body = CylinderParams::new(Axis::Z, 0.25, 0.0, 0.0, 6.14);
        let cone = ConeParams::new(Axis::Z, 0.25, 0.0, 6.14, 6.64);
        let tail = CylinderParams::new(Axis::X, 0.20, 0.0, 0.0, 0.50);
        Self::new(body, cone, tail)
    }
}
