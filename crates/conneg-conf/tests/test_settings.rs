use conneg_conf::NegotiationSettings;
use conneg_negotiation::header::parse_header;
use conneg_negotiation::{
	ValueTuple, perform_encoding_negotiation, perform_type_negotiation_with,
};
use conneg_typemap::{ClientHeaders, parse_typemap, perform_typemap_negotiation};

const SETTINGS: &str = r#"
encoding_whitelist = ["br"]
type_whitelist = ["image/webp"]

[typemap_whitelist]
content-type = ["image/png"]

[wildcard_weights]
full = 0.5
subtype = 0.6
"#;

#[test]
fn test_encoding_whitelist_applies_to_absent_header() {
	let settings = NegotiationSettings::from_toml_str(SETTINGS).unwrap();
	let whitelist = settings.encoding_whitelist_set();
	let server = vec![ValueTuple::new("gzip"), ValueTuple::new("br")];

	let chosen = perform_encoding_negotiation(&[], &server, whitelist.as_ref()).unwrap();
	assert_eq!(chosen.value, "br");
}

#[test]
fn test_type_settings_drive_negotiation() {
	let settings = NegotiationSettings::from_toml_str(SETTINGS).unwrap();
	let whitelist = settings.type_whitelist_set();
	let client = parse_header("text/plain, image/*");
	let server = vec![
		ValueTuple::with_quality("text/plain", 0.5),
		ValueTuple::new("image/avif"),
		ValueTuple::new("image/webp"),
	];

	// image/* weighs 0.6 and beats text/plain at 0.5; avif is not whitelisted
	let chosen =
		perform_type_negotiation_with(&client, &server, whitelist.as_ref(), settings.wildcard_weights)
			.unwrap();
	assert_eq!(chosen.value, "image/webp");
	assert_eq!(chosen.score, Some(0.6));
}

#[test]
fn test_typemap_whitelist_map() {
	let settings = NegotiationSettings::from_toml_str(SETTINGS).unwrap();
	let entries = parse_typemap(
		"URI: a.webp\nContent-Type: image/webp\n\nURI: a.png\nContent-Type: image/png\n",
	);
	let mut client = ClientHeaders::new();
	client.insert("accept".to_string(), parse_header("image/*"));

	let chosen =
		perform_typemap_negotiation(&client, &entries, &settings.typemap_whitelist_map()).unwrap();
	assert_eq!(chosen.uri, "a.png");
}

#[test]
fn test_serialized_settings_load_back() {
	let settings = NegotiationSettings::from_toml_str(SETTINGS).unwrap();
	let text = toml::to_string(&settings).unwrap();
	assert_eq!(NegotiationSettings::from_toml_str(&text).unwrap(), settings);
}
