use serde::{Deserialize, Serialize};

/// Where the resolver settings collected from a configuration reply end up.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,

    /// First line written to the generated file, as a comment.
    #[serde(default = "default_header")]
    pub header: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            resolv_conf_path: default_resolv_conf_path(),
            header: default_header(),
        }
    }
}

fn default_resolv_conf_path() -> String {
    "/run/cfgattr/resolv.conf".to_string()
}

fn default_header() -> String {
    "Generated by cfgattr from IKEv2 configuration attributes".to_string()
}
