use std::str::FromStr;

use crate::models::common::{Axis, GeometryError};

/// 円錐パラメータ
///
/// 1本の座標軸に沿った直円錐（円錐台）を表す不変の値です。
/// 頂面半径が 0 の場合は完全な円錐、0 より大きい場合は円錐台を表します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    /// 長手方向の座標軸
    pub orientation_axis: Axis,
    /// 底面半径（メートル）
    pub bottom_radius: f64,
    /// 頂面半径（メートル、完全な円錐の場合は 0）
    pub top_radius: f64,
    /// 軸方向の開始位置（メートル）
    pub start: f64,
    /// 軸方向の終了位置（メートル）
    pub end: f64,
}

impl ConeParams {
    /// 新しい円錐パラメータを作成します
    ///
    /// この構築は失敗しません。円柱と同様に数値の検証は行わず、
    /// 与えられた値をそのまま保持します。
    ///
    /// # 引数
    ///
    /// * `orientation_axis` - 長手方向の座標軸
    /// * `bottom_radius` - 底面半径（メートル）
    /// * `top_radius` - 頂面半径（メートル、完全な円錐の場合は 0）
    /// * `start` - 軸方向の開始位置（メートル）
    /// * `end` - 軸方向の終了位置（メートル）
    pub fn new(
        orientation_axis: Axis,
        bottom_radius: f64,
        top_radius: f64,
        start: f64,
        end: f64,
    ) -> Self {
        Self {
            orientation_axis,
            bottom_radius,
            top_radius,
            start,
            end,
        }
    }

    /// 軸記号の文字列から円錐パラメータを作成します
    ///
    /// 検証されるのは軸記号のみです。記号が無効な場合は数値を一切格納せず
    /// エラーを返すため、部分的に構築された値は観測されません。
    ///
    /// # 引数
    ///
    /// * `symbol` - 軸記号（"X" / "Y" / "Z"、完全一致）
    /// * `bottom_radius` - 底面半径（メートル）
    /// * `top_radius` - 頂面半径（メートル）
    /// * `start` - 軸方向の開始位置（メートル）
    /// * `end` - 軸方向の終了位置（メートル）
    ///
    /// # 戻り値
    ///
    /// 構築された円錐パラメータ、軸記号が無効な場合は `GeometryError::InvalidAxis`
    pub fn from_symbol(
        symbol: &str,
        bottom_radius: f64,
        top_radius: f64,
        start: f64,
        end: f64,
    ) -> Result<Self, GeometryError> {
        let orientation_axis = Axis::from_str(symbol)?;
        Ok(Self::new(
            orientation_axis,
            bottom_radius,
            top_radius,
            start,
            end,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_new_stores_fields() {
        let cone = ConeParams::new(Axis::Z, 0.25, 0.0, 6.14, 6.64);
        assert_eq!(cone.orientation_axis, Axis::Z);
        assert_eq!(cone.bottom_radius, 0.25);
        assert_eq!(cone.top_radius, 0.0);
        assert_eq!(cone.start, 6.14);
        assert_eq!(cone.end, 6.64);
    }

    #[test]
    fn test_cone_from_symbol_valid() {
        for symbol in ["X", "Y", "Z"] {
            let cone = ConeParams::from_symbol(symbol, 1.0, 0.5, 0.0, 2.0).unwrap();
            assert_eq!(cone.orientation_axis.to_string(), symbol);
        }
    }

    #[test]
    fn test_cone_from_symbol_invalid_axis() {
        let result = ConeParams::from_symbol("zz", 0.25, 0.0, 6.14, 6.64);
        assert_eq!(result, Err(GeometryError::InvalidAxis("zz".to_string())));
        assert!(ConeParams::from_symbol("", 0.25, 0.0, 6.14, 6.64).is_err());
        assert!(ConeParams::from_symbol("3", 0.25, 0.0, 6.14, 6.64).is_err());
    }

    #[test]
    fn test_cone_accepts_any_numeric_values() {
        // 底面半径 < 頂面半径（逆テーパ）や負値も検証せずそのまま保持する
        let cone = ConeParams::new(Axis::X, 0.1, 0.9, 5.0, 1.0);
        assert_eq!(cone.bottom_radius, 0.1);
        assert_eq!(cone.top_radius, 0.9);
        assert_eq!(cone.start, 5.0);
        assert_eq!(cone.end, 1.0);

        let nan_cone = ConeParams::new(Axis::Y, f64::NAN, -0.5, 0.0, f64::NAN);
        assert!(nan_cone.bottom_radius.is_nan());
        assert_eq!(nan_cone.top_radius, -0.5);
        assert!(nan_cone.end.is_nan());
    }

    #[test]
    fn test_cone_equality() {
        let a = ConeParams::new(Axis::Z, 0.25, 0.0, 6.14, 6.64);
        let b = ConeParams::new(Axis::Z, 0.25, 0.0, 6.14, 6.64);
        assert_eq!(a, b);
    }
}
