//! Well-known marker vocabulary.
//!
//! Seeded into the registry at startup so identifier/argument boundary
//! resolution and typo detection work against a realistic set. Checkers
//! that care about additional identifiers register their own on top.

/// Markers that stand alone or take optional arguments.
pub const FLAG_MARKERS: &[&str] = &[
    "optional",
    "required",
    "nullable",
    "kubebuilder:object:root",
    "kubebuilder:object:generate",
    "kubebuilder:subresource:status",
    "kubebuilder:subresource:scale",
    "kubebuilder:resource",
    "kubebuilder:printcolumn",
    "kubebuilder:storageversion",
    "kubebuilder:skipversion",
    "kubebuilder:unservedversion",
    "kubebuilder:deprecatedversion",
    "kubebuilder:pruning:PreserveUnknownFields",
    "kubebuilder:validation:Optional",
    "kubebuilder:validation:Required",
    "kubebuilder:validation:UniqueItems",
    "kubebuilder:validation:XEmbeddedResource",
    "kubebuilder:validation:XIntOrString",
    "kubebuilder:validation:XPreserveUnknownFields",
    "kubebuilder:validation:XValidation",
];

/// Markers whose directive must carry a value.
pub const VALUE_MARKERS: &[&str] = &[
    "groupName",
    "listType",
    "listMapKey",
    "mapType",
    "structType",
    "kubebuilder:default",
    "kubebuilder:example",
    "kubebuilder:validation:Enum",
    "kubebuilder:validation:ExclusiveMaximum",
    "kubebuilder:validation:ExclusiveMinimum",
    "kubebuilder:validation:Format",
    "kubebuilder:validation:MaxItems",
    "kubebuilder:validation:MaxLength",
    "kubebuilder:validation:MaxProperties",
    "kubebuilder:validation:Maximum",
    "kubebuilder:validation:MinItems",
    "kubebuilder:validation:MinLength",
    "kubebuilder:validation:MinProperties",
    "kubebuilder:validation:Minimum",
    "kubebuilder:validation:MultipleOf",
    "kubebuilder:validation:Pattern",
    "kubebuilder:validation:Type",
];

/// Every well-known identifier.
pub fn all() -> impl Iterator<Item = &'static str> {
    FLAG_MARKERS.iter().chain(VALUE_MARKERS.iter()).copied()
}
