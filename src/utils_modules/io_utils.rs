use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given
    structure.

    1. Read the file at `file_path` into a string
    2. Parse the TOML text with `toml::from_str()` into the generic type `T`
    3. Return the parsed structure, or the read/parse error

    # Type Parameters
    * `T` - target structure implementing `DeserializeOwned`

    # Arguments
    * `file_path` - path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure on success
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Serializes a structure to pretty-printed JSON and writes it to a file,
    creating the parent directory when necessary.

    # Arguments
    * `input_struct` - structure to write
    * `output_path` - destination file path

    # Returns
    * `Result<(), anyhow::Error>`
"#]
pub fn write_json_to_file<T: Serialize>(
    input_struct: &T,
    output_path: &Path,
) -> Result<(), anyhow::Error> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json_text: String = serde_json::to_string_pretty(input_struct).map_err(|err| {
        anyhow!(
            "[Error][write_json_to_file()] Failed to serialize struct to JSON: {}",
            err
        )
    })?;

    std::fs::write(output_path, json_text)?;

    Ok(())
}
