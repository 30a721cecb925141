use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{to_string, to_string_pretty, to_value, Map, Value};
use std::{fs, io::Read, path::Path};
use tracing::debug;

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

pub fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

/// Reads a json argument given on the command line. `arg` is either an inline
/// json string, a path to a `.json` file, or `-` for stdin.
pub fn read_json_arg<T>(arg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read json from stdin")?;
        buffer
    } else if arg.ends_with(".json") {
        fs::read_to_string(arg).with_context(|| format!("Failed to read json file: {}", arg))?
    } else {
        arg.to_string()
    };

    debug!(arg, num_bytes = json_str.len(), "read json argument");
    dejsonify::<T>(&json_str).with_context(|| format!("Failed to parse json: {}", arg))
}

/// Writes `obj` as pretty printed json with sorted keys.
pub fn save_json<T, P>(path: P, obj: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let value = jsonify_internal(&to_value(obj)?);
    let json_str = to_string_pretty(&value)?;
    fs::write(path, &json_str)
        .with_context(|| format!("Failed to write json file: {}", path.display()))?;
    debug!(path = %path.display(), num_bytes = json_str.len(), "saved json");
    Ok(())
}
