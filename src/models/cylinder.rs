use std::str::FromStr;

use crate::models::common::{Axis, GeometryError};

/// 円柱パラメータ
///
/// 1本の座標軸に沿った（中空でもよい）直円柱を表す不変の値です。
/// 内半径が 0 の場合は中実円柱を表します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    /// 長手方向の座標軸
    pub orientation_axis: Axis,
    /// 外半径（メートル）
    pub outer_radius: f64,
    /// 内半径（メートル、中実の場合は 0）
    pub inner_radius: f64,
    /// 軸方向の開始位置（メートル）
    pub start: f64,
    /// 軸方向の終了位置（メートル）
    pub end: f64,
}

impl CylinderParams {
    /// 新しい円柱パラメータを作成します
    ///
    /// この構築は失敗しません。半径や範囲の数値は検証せず、与えられた値を
    /// そのまま保持します（負の半径や start > end もそのまま受理）。
    ///
    /// # 引数
    ///
    /// * `orientation_axis` - 長手方向の座標軸
    /// * `outer_radius` - 外半径（メートル）
    /// * `inner_radius` - 内半径（メートル、中実の場合は 0）
    /// * `start` - 軸方向の開始位置（メートル）
    /// * `end` - 軸方向の終了位置（メートル）
    pub fn new(
        orientation_axis: Axis,
        outer_radius: f64,
        inner_radius: f64,
        start: f64,
        end: f64,
    ) -> Self {
        Self {
            orientation_axis,
            outer_radius,
            inner_radius,
            start,
            end,
        }
    }

    /// 軸記号の文字列から円柱パラメータを作成します
    ///
    /// 検証されるのは軸記号のみです。記号が無効な場合は数値を一切格納せず
    /// エラーを返すため、部分的に構築された値は観測されません。
    ///
    /// # 引数
    ///
    /// * `symbol` - 軸記号（"X" / "Y" / "Z"、完全一致）
    /// * `outer_radius` - 外半径（メートル）
    /// * `inner_radius` - 内半径（メートル）
    /// * `start` - 軸方向の開始位置（メートル）
    /// * `end` - 軸方向の終了位置（メートル）
    ///
    /// # 戻り値
    ///
    /// 構築された円柱パラメータ、軸記号が無効な場合は `GeometryError::InvalidAxis`
    pub fn from_symbol(
        symbol: &str,
        outer_radius: f64,
        inner_radius: f64,
        start: f64,
        end: f64,
    ) -> Result<Self, GeometryError> {
        let orientation_axis = Axis::from_str(symbol)?;
        Ok(Self::new(
            orientation_axis,
            outer_radius,
            inner_radius,
            start,
            end,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_new_stores_fields() {
        let cylinder = CylinderParams::new(Axis::Z, 0.25, 0.0, 0.0, 6.14);
        assert_eq!(cylinder.orientation_axis, Axis::Z);
        assert_eq!(cylinder.outer_radius, 0.25);
        assert_eq!(cylinder.inner_radius, 0.0);
        assert_eq!(cylinder.start, 0.0);
        assert_eq!(cylinder.end, 6.14);
    }

    #[test]
    fn test_cylinder_from_symbol_valid() {
        let cylinder = CylinderParams::from_symbol("X", 0.20, 0.0, 0.0, 0.50).unwrap();
        assert_eq!(cylinder.orientation_axis, Axis::X);
        assert_eq!(cylinder.outer_radius, 0.20);
    }

    #[test]
    fn test_cylinder_from_symbol_invalid_axis() {
        let result = CylinderParams::from_symbol("A", 0.25, 0.0, 0.0, 6.14);
        assert_eq!(result, Err(GeometryError::InvalidAxis("A".to_string())));
        assert!(CylinderParams::from_symbol("z", 0.25, 0.0, 0.0, 6.14).is_err());
        assert!(CylinderParams::from_symbol("", 0.25, 0.0, 0.0, 6.14).is_err());
        assert!(CylinderParams::from_symbol("XY", 0.25, 0.0, 0.0, 6.14).is_err());
    }

    #[test]
    fn test_cylinder_accepts_any_numeric_values() {
        // 数値には検証を行わない（負の半径・逆転した範囲もそのまま保持する）
        let cylinder = CylinderParams::new(Axis::Y, -1.0, 5.0, 10.0, -10.0);
        assert_eq!(cylinder.outer_radius, -1.0);
        assert_eq!(cylinder.inner_radius, 5.0);
        assert_eq!(cylinder.start, 10.0);
        assert_eq!(cylinder.end, -10.0);

        let nan_cylinder = CylinderParams::from_symbol("X", f64::NAN, 0.0, 0.0, 1.0).unwrap();
        assert!(nan_cylinder.outer_radius.is_nan());
    }

    #[test]
    fn test_cylinder_equality() {
        let a = CylinderParams::new(Axis::Z, 0.25, 0.0, 0.0, 6.14);
        let b = CylinderParams::new(Axis::Z, 0.25, 0.0, 0.0, 6.14);
        assert_eq!(a, b);

        let c = CylinderParams::new(Axis::X, 0.25, 0.0, 0.0, 6.14);
        assert_ne!(a, c);
    }
}
