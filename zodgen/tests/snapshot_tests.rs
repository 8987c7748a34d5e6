//! Snapshot tests for generated Zod expressions.
//!
//! These use insta inline snapshots to pin the exact output text.
//! Run `cargo insta review` to review and accept snapshot changes.

use insta::assert_snapshot;
use serde_json::json;
use zodgen::{generate, Type, TypeRegistry};

fn render(definition: serde_json::Value) -> String {
    generate(
        &Type::from_value(definition).expect("definition should decode"),
        &TypeRegistry::new(),
    )
}

#[test]
fn test_number_schema() {
    assert_snapshot!(
        render(json!({ "type": "number", "minimum": 0, "maximum": 1, "exclusiveMaximum": true, "multipleOf": 0.01 })),
        @"z.number().gte(0).lt(1).multipleOf(0.01)"
    );
}

#[test]
fn test_datetime_schema() {
    assert_snapshot!(
        render(json!({ "type": "datetime", "offset": true, "precision": 3 })),
        @"z.iso.datetime({ offset: true, precision: 3 })"
    );
}

#[test]
fn test_color_schema() {
    assert_snapshot!(
        render(json!({ "type": "color" })),
        @"z.string().regex(/^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3}|[A-Fa-f0-9]{8}|[A-Fa-f0-9]{4})$/)"
    );
}

#[test]
fn test_nanoid_schema() {
    assert_snapshot!(
        render(json!({ "type": "nanoid", "length": 21 })),
        @"z.string().nanoid().length(21)"
    );
}

#[test]
fn test_url_protocol_schema() {
    assert_snapshot!(
        render(json!({ "type": "url", "protocol": { "mode": "whitelist", "value": ["https"] } })),
        @r#"z.string().url().refine((val) => { let url; try { url = new URL(val); } catch { return true; } const subject = url.protocol.replace(/:$/, ""); return subject === "https"; }, { message: "URL protocol is not allowed" })"#
    );
}

#[test]
fn test_email_domain_schema() {
    assert_snapshot!(
        render(json!({ "type": "email", "mode": "blacklist", "domain": ["spam.test", "junk.test"] })),
        @r#"z.string().email().refine((val) => { const at = val.lastIndexOf("@"); if (at < 0) return true; const subject = val.slice(at + 1).toLowerCase(); return !(["spam.test", "junk.test"].includes(subject)); }, { message: "Email domain is not allowed" })"#
    );
}

#[test]
fn test_nested_object_schema() {
    assert_snapshot!(
        render(json!({
            "type": "object",
            "properties": {
                "id": { "type": "ulid" },
                "tags": { "type": "array", "itemType": { "type": "string" }, "maxItems": 5 },
                "kind": { "type": "enum", "values": ["a", "b"] }
            },
            "required": ["id", "kind"],
            "additionalProperties": true
        })),
        @r#"
    z.object({
      "id": z.string().ulid(),
      "tags": z.array(z.string()).max(5).optional(),
      "kind": z.enum(["a", "b"])
    }).passthrough()
    "#
    );
}
