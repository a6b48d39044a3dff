use std::collections::HashMap;

use chatgpt::config::{ClientConfig, DEFAULT_BASE_URL};
use chatgpt::{Client, Error};

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String>
{   let map: HashMap<String, String> = vars.iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn test_defaults()
{   let config = ClientConfig::new("sk-test");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(
      config.chat_completions_url(),
      "https://api.openai.com/v1/chat/completions"
    );
    assert!(config.organization.is_none());
    assert!(config.timeout_secs.is_none());
    assert!(!config.is_verbose());
}

#[test]
fn test_trailing_slash_is_trimmed()
{   let config = ClientConfig::new("sk-test")
      .with_base_url("http://localhost:8080/v1/");
    assert_eq!(
      config.chat_completions_url(),
      "http://localhost:8080/v1/chat/completions"
    );
}

#[test]
fn test_from_lookup_reads_all_variables()
{   let config = ClientConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-env")
      , ("OPENAI_BASE_URL", "http://proxy.local/v1")
      , ("OPENAI_ORGANIZATION", "org-42")
      , ("OPENAI_TIMEOUT_SECS", " 30 ")
      ]))
      .unwrap();
    assert_eq!(config.api_key, "sk-env");
    assert_eq!(config.base_url, "http://proxy.local/v1");
    assert_eq!(config.organization.as_deref(), Some("org-42"));
    assert_eq!(config.timeout_secs, Some(30));
}

#[test]
fn test_from_lookup_missing_key()
{   let result = ClientConfig::from_lookup(lookup_from(&[]));
    assert!(matches!(result, Err(Error::MissingApiKey(_))));
}

#[test]
fn test_from_lookup_bad_timeout()
{   let result = ClientConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-env")
      , ("OPENAI_TIMEOUT_SECS", "soon")
      ]));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_from_json_str()
{   let config = ClientConfig::from_json_str(
      r#"{ "api_key": "sk-json", "timeout_secs": 10, "verbose": true }"#
    ).unwrap();
    assert_eq!(config.api_key, "sk-json");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_secs, Some(10));
    assert!(config.is_verbose());

    assert!(matches!(
      ClientConfig::from_json_str(r#"{ "base_url": "x" }"#),
      Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_empty_key_rejected_by_client()
{   let result = Client::new(ClientConfig::new("  "));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));

    let result = Client::new(ClientConfig::new("sk").with_base_url(""));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_debug_output_masks_api_key()
{   let config = ClientConfig::new("sk-SECRET-123")
      .with_organization("org-42");
    let shown = format!("{:?}", config);
    assert!(!shown.contains("sk-SECRET-123"));
    assert!(shown.contains("org-42"));

    let client = Client::new(config).unwrap();
    let shown = format!("{:?}", client);
    assert!(!shown.contains("sk-SECRET-123"));
    assert!(shown.contains("***"));
}
