// 基本的なデータ型（座標軸とエラー型）
pub mod common;

// 各形状コンポーネントのパラメータモデル
pub mod cone;
pub mod cylinder;

// ターゲット形状の集約モデル
pub mod rocket;

// 便利な re-export
pub use common::{Axis, GeometryError};
pub use cone::ConeParams;
pub use cylinder::CylinderParams;
pub use rocket::RocketGeometry;
