//! One module per quality check. Each exposes `check(...) -> Vec<Issue>`.

pub mod dates;
pub mod group_type;
pub mod identifier;
pub mod presence;
pub mod text;

use polars::prelude::DataType;

/// Short, stable name for a column type.
pub fn dtype_label(dtype: &DataType) -> String {
    match dtype {
        DataType::Int8 => "int8".to_string(),
        DataType::Int16 => "int16".to_string(),
        DataType::Int32 => "int32".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::UInt8 => "uint8".to_string(),
        DataType::UInt16 => "uint16".to_string(),
        DataType::UInt32 => "uint32".to_string(),
        DataType::UInt64 => "uint64".to_string(),
        DataType::Float32 => "float32".to_string(),
        DataType::Float64 => "float64".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::String => "string".to_string(),
        DataType::Date => "date".to_string(),
        DataType::Null => "null".to_string(),
        other => other.to_string(),
    }
}
