//! 类型定义模块

mod schema;
mod value;

pub use schema::{FieldKind, FieldSpec, FormSchema, InputKind};
pub use value::{FieldValue, ValueMap};

pub(crate) use value::{display_json, scalar_to_string};
