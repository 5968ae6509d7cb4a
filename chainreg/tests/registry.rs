//! End-to-end tests over the embedded configuration document and the
//! environment-selector loading paths.

use chainreg::{ChainConfigRegistry, Environment, Error, Protocol};

#[test]
fn production_ethereum_is_mainnet() {
    let registry = ChainConfigRegistry::load(&Environment::Production).unwrap();
    let ethereum = registry.get("ethereum").unwrap();
    assert_eq!(ethereum.chain_id().get(), 1);
    assert_eq!(ethereum.environment(), &Environment::Production);
}

#[test]
fn development_ethereum_is_the_docker_chain() {
    let registry = ChainConfigRegistry::load(&Environment::Development).unwrap();
    let ethereum = registry.get("ethereum").unwrap();
    assert_eq!(ethereum.chain_id().get(), 8995);
}

#[test]
fn development_data_token_address_is_exact() {
    let registry = ChainConfigRegistry::load(&Environment::Development).unwrap();
    let ethereum = registry.get("ethereum").unwrap();
    let token = ethereum.contract("DATA-token").unwrap();
    assert_eq!(token.as_str(), "0xbAA81A0179015bE47Ad439566374F2Bae098686F");
}

#[test]
fn production_polygon_default_http_endpoint() {
    let registry = ChainConfigRegistry::load(&Environment::Production).unwrap();
    let polygon = registry.get("polygon").unwrap();
    let http = polygon.rpc_endpoints_by_protocol(Protocol::Http);
    assert!(!http.is_empty());
    // Url normalizes the serialization with a trailing slash.
    assert_eq!(http[0].url.as_str(), "https://polygon-rpc.com/");
    // The protocol filter must agree with the overall default endpoint.
    assert_eq!(polygon.rpc_endpoints()[0], *http[0]);
}

#[test]
fn unknown_network_lookup_fails() {
    let registry = ChainConfigRegistry::load(&Environment::Production).unwrap();
    assert!(matches!(
        registry.get("moonbase"),
        Err(Error::UnknownNetwork(name)) if name == "moonbase"
    ));
}

#[test]
fn selector_unset_is_an_error() {
    assert!(matches!(
        ChainConfigRegistry::from_selector(None),
        Err(Error::MissingEnvironmentVariable)
    ));
}

#[test]
fn selector_outside_recognized_set_is_an_error() {
    assert!(matches!(
        ChainConfigRegistry::from_selector(Some("dev")),
        Err(Error::InvalidEnvironmentValue(value)) if value == "dev"
    ));
}

#[test]
fn selector_recognized_values_load() {
    let registry = ChainConfigRegistry::from_selector(Some("production")).unwrap();
    assert_eq!(registry.environment(), &Environment::Production);
    assert!(registry.get("ethereum").is_ok());
}

#[test]
fn successive_loads_are_element_wise_equal() {
    let first = ChainConfigRegistry::load(&Environment::Development).unwrap();
    let second = ChainConfigRegistry::load(&Environment::Development).unwrap();
    assert_eq!(first, second);
}

#[test]
fn open_environment_keys_load_custom_sections() {
    let document = r#"
[staging.ethereum]
chain_id = 11155111

[staging.ethereum.contracts]
"DATA-token" = "0x0000000000000000000000000000000000000042"

[[staging.ethereum.rpc_endpoints]]
protocol = "http"
url = "https://sepolia.example.org"
"#;
    let environment = Environment::from("staging");
    let registry = ChainConfigRegistry::load_from_str(document, &environment).unwrap();
    assert_eq!(registry.get("ethereum").unwrap().chain_id().get(), 11155111);
}

#[test]
fn environment_without_a_section_is_an_error() {
    let err = ChainConfigRegistry::load(&Environment::from("staging")).unwrap_err();
    assert!(matches!(err, Error::UnknownEnvironment(key) if key == "staging"));
}

#[test]
fn malformed_document_fails_with_config_parse() {
    let err =
        ChainConfigRegistry::load_from_str("not toml at all [", &Environment::Production)
            .unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));

    // Wrong type for a required field.
    let document = r#"
[production.ethereum]
chain_id = "one"
"#;
    let err =
        ChainConfigRegistry::load_from_str(document, &Environment::Production).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn invalid_address_aborts_the_whole_load() {
    let document = r#"
[production.ethereum]
chain_id = 1

[production.ethereum.contracts]
"DATA-token" = "0x1234"
"#;
    let err =
        ChainConfigRegistry::load_from_str(document, &Environment::Production).unwrap_err();
    assert!(matches!(err, Error::InvalidAddressFormat(raw) if raw == "0x1234"));
}

#[test]
fn nonpositive_chain_id_aborts_the_whole_load() {
    let document = r#"
[production.ethereum]
chain_id = 0
"#;
    let err =
        ChainConfigRegistry::load_from_str(document, &Environment::Production).unwrap_err();
    assert!(matches!(err, Error::InvalidChainId(0)));
}

#[test]
fn every_embedded_network_is_fully_valid() {
    for environment in [Environment::Production, Environment::Development] {
        let registry = ChainConfigRegistry::load(&environment).unwrap();
        assert!(!registry.is_empty());
        for network in registry.networks() {
            assert!(network.chain_id().get() > 0);
            assert!(!network.rpc_endpoints().is_empty(), "{}", network.name());
            assert_eq!(network.environment(), &environment);
        }
    }
}
