use es_project::{ProjectError, ValidationError, load, load_json, load_yaml, save_json, save_yaml};
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("data")
}

#[test]
fn bundled_documents_load() {
    for name in ["input.yaml", "input_prescribed.yaml"] {
        let path = data_dir().join(name);
        let result = load_yaml(&path);
        assert!(
            result.is_ok(),
            "document failed to load: {} => {:?}",
            path.display(),
            result.err()
        );
    }
}

#[test]
fn input_document_has_no_computed_fields() {
    let doc = load_yaml(&data_dir().join("input.yaml")).unwrap();
    assert_eq!(doc.engine.exhaust_gamma, None);
    assert_eq!(doc.engine.throat_area, None);
    assert_eq!(doc.injector.ox_injector_area, None);
    assert_eq!(doc.plumbing.ox_pressure_drop, None);
    assert_eq!(doc.propellants.fuel_temp, 298.15);
}

#[test]
fn roundtrip_yaml_with_computed_fields() {
    let mut doc = load_yaml(&data_dir().join("input_prescribed.yaml")).unwrap();
    doc.engine.throat_area = Some(8.9e-4);
    doc.plumbing.ox_flow_vel = Some(67.5);

    let path = std::env::temp_dir().join("es_project_roundtrip.yaml");
    save_yaml(&path, &doc).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(doc, loaded);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("throat_area"));
    assert!(!text.contains("exit_area"));
}

#[test]
fn roundtrip_json() {
    let doc = load_yaml(&data_dir().join("input_prescribed.yaml")).unwrap();

    let path = std::env::temp_dir().join("es_project_roundtrip.json");
    save_json(&path, &doc).unwrap();
    assert_eq!(doc, load_json(&path).unwrap());
    assert_eq!(doc, load(&path).unwrap());
}

#[test]
fn invalid_document_is_not_loaded() {
    let yaml = std::fs::read_to_string(data_dir().join("input.yaml"))
        .unwrap()
        .replace("num_ox_injectors: 12", "num_ox_injectors: 0");
    let path = std::env::temp_dir().join("es_project_invalid.yaml");
    std::fs::write(&path, yaml).unwrap();

    match load_yaml(&path) {
        Err(ProjectError::Validation(ValidationError::InvalidValue { field, .. })) => {
            assert_eq!(field, "injector.num_ox_injectors");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn missing_section_is_a_parse_error() {
    let path = std::env::temp_dir().join("es_project_partial.yaml");
    std::fs::write(&path, "propellants:\n  fuel_chem: Ethanol\n").unwrap();
    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}

#[test]
fn json_keeps_computed_values_bit_exact() {
    let mut doc = load_yaml(&data_dir().join("input_prescribed.yaml")).unwrap();
    doc.engine.specific_impulse = Some(240.40870032597914);
    doc.engine.chamber_volume = Some(9.793_186_217_424_157e-4);
    doc.engine.chamber_length = Some(0.1 + 0.2);
    doc.plumbing.ox_reynolds = Some(2.0_f64.sqrt() * 1.0e5);

    let path = std::env::temp_dir().join(format!("es_project_bits_{}.json", std::process::id()));
    save_json(&path, &doc).unwrap();
    let loaded = load_json(&path).unwrap();

    for (saved, reloaded) in [
        (doc.engine.specific_impulse, loaded.engine.specific_impulse),
        (doc.engine.chamber_volume, loaded.engine.chamber_volume),
        (doc.engine.chamber_length, loaded.engine.chamber_length),
        (doc.plumbing.ox_reynolds, loaded.plumbing.ox_reynolds),
    ] {
        assert_eq!(saved.map(f64::to_bits), reloaded.map(f64::to_bits));
    }
}
