//! Case conversion filters registered on every template render

use std::collections::HashMap;

use inflector::cases::{
    camelcase::to_camel_case, pascalcase::to_pascal_case, snakecase::to_snake_case,
};
use tera::{Tera, Value};

/// Register `snake_case`, `upper_camel_case` and `lower_camel_case`
pub fn register(tera: &mut Tera) {
    tera.register_filter("snake_case", snake_case);
    tera.register_filter("upper_camel_case", upper_camel_case);
    tera.register_filter("lower_camel_case", lower_camel_case);
}

fn snake_case(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply("snake_case", value, to_snake_case)
}

fn upper_camel_case(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply("upper_camel_case", value, to_pascal_case)
}

fn lower_camel_case(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    apply("lower_camel_case", value, to_camel_case)
}

fn apply(filter: &str, value: &Value, convert: fn(&str) -> String) -> tera::Result<Value> {
    match value {
        Value::String(s) => Ok(Value::String(convert(s))),
        other => Err(tera::Error::msg(format!(
            "Filter `{}` expects a string, got {}",
            filter, other
        ))),
    }
}
