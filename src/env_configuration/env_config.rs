use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    Every required path of the application is handed over through environment
    variables, so a missing key means the process cannot run at all.

    1. Look the key up with `env::var()`
    2. Return the value when present
    3. Otherwise log the error and panic, terminating the application

    # Arguments
    * `key` - environment variable name

    # Panics
    When the environment variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML file listing the expectations whose validation trend
    should be charted (expectation id + result type per entry).

    Supplied through the `EXPECTATION_LIST_PATH` environment variable and
    initialized lazily on first access.

    # Panics
    When `EXPECTATION_LIST_PATH` is not set
"#]
pub static EXPECTATION_LIST_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("EXPECTATION_LIST_PATH"));

#[doc = r#"
    Path of the TOML server configuration file.

    Supplied through the `SERVER_CONFIG_PATH` environment variable and
    initialized lazily on first access. The file carries the Elasticsearch
    connection information for the validation store plus the system section
    (validation index name, tick interval, chart output directory).

    # Panics
    When `SERVER_CONFIG_PATH` is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));
