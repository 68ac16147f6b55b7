mod common;

use common::*;
use pretty_assertions::assert_eq;
use seofields_host::{Capabilities, MetaStore, RecordingRegistrar};
use seofields_registry::{BindingKind, FieldRegistry, RegistryConfig, RegistryError};
use seofields_types::{AttributeKey, EntityType};
use serde_json::json;
use std::sync::Arc;

// ── Registration ─────────────────────────────────────────────────

#[test]
fn builtin_types_are_bound() {
    let registry = make_registry(make_host());

    let kinds: Vec<_> = registry
        .bindings()
        .map(|b| (b.entity_type.as_str().to_string(), b.kind, b.capabilities.writable))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("category".to_string(), BindingKind::Aggregate, false),
            ("page".to_string(), BindingKind::Entity, true),
            ("post".to_string(), BindingKind::Entity, true),
            ("product".to_string(), BindingKind::Entity, true),
            ("tag".to_string(), BindingKind::Aggregate, false),
        ]
    );
}

#[test]
fn custom_types_cannot_shadow_builtins() {
    let config = RegistryConfig {
        custom_types: vec!["category".to_string(), "post".to_string(), "product".to_string()],
        ..RegistryConfig::default()
    };
    let registry = FieldRegistry::with_builtin_types(Arc::new(make_host()), config);

    let category = registry.binding(&EntityType::category()).unwrap();
    assert_eq!(category.kind, BindingKind::Aggregate);
    assert!(!category.capabilities.writable);
    assert_eq!(
        registry.binding(&EntityType::post()).unwrap().kind,
        BindingKind::Entity
    );
    assert!(registry.binding(&EntityType::new("product")).is_some());
    assert_eq!(registry.bindings().count(), 5);
}

#[test]
fn re_registering_replaces_binding() {
    let mut registry = FieldRegistry::new(Arc::new(make_host()), RegistryConfig::default());
    assert_eq!(registry.register_type(EntityType::post(), Capabilities::read_write()), None);

    let previous = registry
        .register_type(EntityType::post(), Capabilities::read_only())
        .unwrap();
    assert!(previous.capabilities.writable);
    assert!(!registry.binding(&EntityType::post()).unwrap().capabilities.writable);
    assert_eq!(registry.bindings().count(), 1);
}

#[test]
fn install_declares_field_per_type() {
    let registry = make_registry(make_host());
    let mut registrar = RecordingRegistrar::new();
    registry.install(&mut registrar);

    assert_eq!(registrar.fields.len(), 5);
    assert_eq!(
        registrar.declared(&EntityType::post(), "yoast_meta"),
        Some(Capabilities::read_write())
    );
    assert_eq!(
        registrar.declared(&EntityType::tag(), "yoast_meta"),
        Some(Capabilities::read_only())
    );
}

#[test]
fn install_uses_configured_field_name() {
    let config = RegistryConfig {
        field_name: "seo".to_string(),
        ..RegistryConfig::default()
    };
    let registry = FieldRegistry::with_builtin_types(Arc::new(make_host()), config);
    let mut registrar = RecordingRegistrar::new();
    registry.install(&mut registrar);

    assert!(registrar.declared(&EntityType::page(), "seo").is_some());
    assert!(registrar.declared(&EntityType::page(), "yoast_meta").is_none());
}

// ── Read ─────────────────────────────────────────────────────────

#[test]
fn read_resolves_through_template() {
    let registry = make_registry(make_host());
    let meta = registry.read(id(POST), &EntityType::post()).unwrap();

    assert_eq!(meta.len(), AttributeKey::ALL.len());
    assert_eq!(meta[&AttributeKey::Title], "Hello | MySite");
    assert_eq!(meta[&AttributeKey::MetaDescription], "");
    assert_eq!(meta[&AttributeKey::Canonical], "");
}

#[test]
fn read_uses_native_title_without_template() {
    let registry = make_registry(make_host());
    let meta = registry.read(id(PRODUCT), &EntityType::new("product")).unwrap();
    assert_eq!(meta[&AttributeKey::Title], "Widget");
}

#[test]
fn read_unregistered_type_fails() {
    let registry = make_registry(make_host());
    let err = registry.read(id(POST), &EntityType::new("attachment")).unwrap_err();
    assert!(matches!(err, RegistryError::UnregisteredType(ref t) if t.as_str() == "attachment"));
}

#[test]
fn read_of_aggregate_type_is_kind_mismatch() {
    let registry = make_registry(make_host());
    let err = registry.read(id(NEWS), &EntityType::category()).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::KindMismatch { expected: BindingKind::Entity, .. }
    ));
}

#[test]
fn unreadable_binding_rejects_reads() {
    let mut registry = make_registry(make_host());
    registry.register_type(
        EntityType::post(),
        Capabilities {
            readable: false,
            writable: true,
        },
    );
    let err = registry.read(id(POST), &EntityType::post()).unwrap_err();
    assert!(matches!(err, RegistryError::NotReadable(_)));
}

#[test]
fn unreadable_binding_rejects_updates_before_writing() {
    let mut registry = make_registry(make_host());
    registry.register_type(
        EntityType::post(),
        Capabilities {
            readable: false,
            writable: true,
        },
    );
    let err = registry
        .update(id(POST), &EntityType::post(), [("yoast_wpseo_title", "New")])
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotReadable(_)));
    assert!(registry.host().stored_keys(id(POST)).is_empty());
}

#[test]
fn read_key_validates_name() {
    let registry = make_registry(make_host());
    assert_eq!(
        registry.read_key(id(POST), &EntityType::post(), "yoast_wpseo_title").unwrap(),
        "Hello | MySite"
    );
    let err = registry
        .read_key(id(POST), &EntityType::post(), "unrelated_key")
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported attribute key: unrelated_key");
}

// ── Update ───────────────────────────────────────────────────────

#[test]
fn update_persists_only_whitelisted_keys() {
    let registry = make_registry(make_host());
    let outcome = registry
        .update(
            id(POST),
            &EntityType::post(),
            [("yoast_wpseo_title", "New"), ("unrelated_key", "X")],
        )
        .unwrap();

    assert_eq!(registry.host().stored_keys(id(POST)), vec!["_yoast_wpseo_title"]);
    assert_eq!(outcome.writes.len(), 1);
    assert!(outcome.all_succeeded());
    assert_eq!(outcome.values[&AttributeKey::Title], "New");
}

#[test]
fn update_skips_empty_names() {
    let registry = make_registry(make_host());
    let outcome = registry
        .update(id(POST), &EntityType::post(), [("", "ignored")])
        .unwrap();

    assert!(outcome.writes.is_empty());
    assert!(registry.host().stored_keys(id(POST)).is_empty());
}

#[test]
fn update_rejects_bare_field_names() {
    let registry = make_registry(make_host());
    registry
        .update(id(POST), &EntityType::post(), [("title", "Nope")])
        .unwrap();
    assert!(registry.host().stored_keys(id(POST)).is_empty());
}

#[test]
fn update_returns_effective_values() {
    let registry = make_registry(make_host());
    let outcome = registry
        .update(
            id(POST),
            &EntityType::post(),
            [("yoast_wpseo_metadesc", "%%excerpt%% on %%sitename%%")],
        )
        .unwrap();

    assert_eq!(
        registry.host().get_attribute(id(POST), "_yoast_wpseo_metadesc").as_deref(),
        Some("%%excerpt%% on %%sitename%%")
    );
    assert_eq!(outcome.values[&AttributeKey::MetaDescription], "First post on MySite");
}

#[test]
fn clearing_override_restores_template() {
    let registry = make_registry(make_host());
    registry
        .update(id(POST), &EntityType::post(), [("yoast_wpseo_title", "Custom")])
        .unwrap();
    let outcome = registry
        .update(id(POST), &EntityType::post(), [("yoast_wpseo_title", "")])
        .unwrap();
    assert_eq!(outcome.values[&AttributeKey::Title], "Hello | MySite");
}

#[test]
fn failed_write_is_reported_and_others_continue() {
    let mut host = make_host();
    host.reject_writes_to("_yoast_wpseo_canonical");
    let registry = make_registry(host);

    let outcome = registry
        .update(
            id(POST),
            &EntityType::post(),
            [
                ("yoast_wpseo_canonical", "https://example.com/hello"),
                ("yoast_wpseo_focuskw", "greeting"),
            ],
        )
        .unwrap();

    assert!(!outcome.all_succeeded());
    assert_eq!(outcome.failed_keys(), vec![AttributeKey::Canonical]);
    assert!(outcome.writes[0].error.as_deref().unwrap().contains("_yoast_wpseo_canonical"));
    assert!(outcome.writes[1].succeeded);
    assert_eq!(outcome.values[&AttributeKey::Canonical], "");
    assert_eq!(outcome.values[&AttributeKey::FocusKeyword], "greeting");
}

#[test]
fn update_on_read_only_type_fails() {
    let mut registry = make_registry(make_host());
    registry.register_type(EntityType::page(), Capabilities::read_only());

    let err = registry
        .update(id(PAGE), &EntityType::page(), [("yoast_wpseo_title", "X")])
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotWritable(_)));
    assert!(registry.host().stored_keys(id(PAGE)).is_empty());
}

#[test]
fn update_on_aggregate_fails() {
    let registry = make_registry(make_host());
    let err = registry
        .update(id(NEWS), &EntityType::category(), [("yoast_wpseo_title", "X")])
        .unwrap_err();
    assert!(matches!(err, RegistryError::KindMismatch { .. }));
}

#[test]
fn update_json_coerces_scalars() {
    let registry = make_registry(make_host());
    let body = json!({
        "yoast_wpseo_linkdex": 87,
        "yoast_wpseo_meta-robots-noindex": true,
        "yoast_wpseo_redirect": null,
        "yoast_wpseo_metakeywords": ["a", "b"],
    });

    let outcome = registry
        .update_json(id(POST), &EntityType::post(), body.as_object().unwrap())
        .unwrap();

    assert_eq!(outcome.writes.len(), 3);
    assert_eq!(outcome.values[&AttributeKey::Linkdex], "87");
    assert_eq!(outcome.values[&AttributeKey::RobotsNoIndex], "true");
    assert_eq!(outcome.values[&AttributeKey::Redirect], "");
    assert_eq!(
        registry.host().get_attribute(id(POST), "_yoast_wpseo_metakeywords"),
        None
    );
}

#[test]
fn update_outcome_serializes_for_rest() {
    let mut host = make_host();
    host.reject_writes_to("_yoast_wpseo_focuskw");
    let registry = make_registry(host);
    let outcome = registry
        .update(
            id(POST),
            &EntityType::post(),
            [("yoast_wpseo_title", "New"), ("yoast_wpseo_focuskw", "kw")],
        )
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["values"]["yoast_wpseo_title"], "New");
    assert_eq!(json["writes"][0], json!({"key": "yoast_wpseo_title", "succeeded": true}));
    assert_eq!(json["writes"][1]["succeeded"], false);
}
