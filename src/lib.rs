//! # rktgeom
//!
//! 計測実験で使用する簡易ロケット弾ターゲット形状のパラメータモデルです。
//!
//! 主胴体（円柱）、ノーズコーン（円錐）、尾部（円柱）の3コンポーネントを
//! 不変の値オブジェクトとして提供します。形状モデル本体は入出力を持たず、
//! YAMLシナリオの読み込みは scenario モジュールが担当します。

pub mod logging;
pub mod models;
pub mod scenario;

pub use models::{Axis, ConeParams, CylinderParams, GeometryError, RocketGeometry};
