use std::fmt;
use std::str::FromStr;

/// 形状の長手方向を表す座標軸の列挙型
///
/// 各形状パーツの向きは主座標軸 X / Y / Z のいずれかに限定されます。
/// 軸に制約があるのはこのフィールドのみで、半径や範囲には制約がありません。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    /// X軸方向
    X,
    /// Y軸方向
    Y,
    /// Z軸方向
    Z,
}

impl FromStr for Axis {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 大文字1文字との完全一致のみ許可（小文字・空文字・複数文字は正規化せず拒否）
        match s {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            "Z" => Ok(Axis::Z),
            _ => Err(GeometryError::InvalidAxis(s.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{}", symbol)
    }
}

/// 形状モデル構築時のエラー
///
/// 失敗するのは構築時のみで、構築後の値の参照は失敗しません。
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// 軸記号が X / Y / Z のいずれでもない
    InvalidAxis(String),
    /// 必須コンポーネント（主胴体・ノーズコーン・尾部）が未指定
    MissingComponent(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidAxis(symbol) => {
                write!(f, "無効な軸記号: '{}'. 利用可能: X, Y, Z", symbol)
            }
            GeometryError::MissingComponent(name) => {
                write!(f, "必須コンポーネントが未指定です: {}", name)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_str_valid() {
        assert_eq!(Axis::from_str("X"), Ok(Axis::X));
        assert_eq!(Axis::from_str("Y"), Ok(Axis::Y));
        assert_eq!(Axis::from_str("Z"), Ok(Axis::Z));
    }

    #[test]
    fn test_axis_from_str_rejects_lowercase() {
        // 小文字は正規化せずそのまま拒否する
        assert!(Axis::from_str("x").is_err());
        assert!(Axis::from_str("y").is_err());
        assert!(Axis::from_str("z").is_err());
    }

    #[test]
    fn test_axis_from_str_rejects_malformed() {
        assert!(Axis::from_str("").is_err());
        assert!(Axis::from_str("XY").is_err());
        assert!(Axis::from_str("5").is_err());
        assert!(Axis::from_str(" X").is_err());
        assert!(Axis::from_str("W").is_err());
    }

    #[test]
    fn test_axis_error_carries_symbol() {
        assert_eq!(
            Axis::from_str("w"),
            Err(GeometryError::InvalidAxis("w".to_string()))
        );
    }

    #[test]
    fn test_axis_display_roundtrip() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let symbol = axis.to_string();
            assert_eq!(Axis::from_str(&symbol), Ok(axis));
        }
    }
}
