//! Macro for declaring console record types
//!
//! Every listed entity carries the same base fields (id, type, timestamps,
//! soft-delete marker, status, name) and differs only in its typed extras,
//! its searchable fields, and whether it is scoped to a hotel. `impl_record!`
//! generates the struct, the `Entity`/`Record` impls, and the usual
//! lifecycle helpers, so each feature module stays a thin adapter.

/// Declare a record type with automatic trait implementations.
///
/// # Example
///
/// ```rust,ignore
/// use stayops::impl_record;
///
/// impl_record!(
///     Kiosk,
///     "kiosk", "kiosks",
///     searchable: ["name", "location"],
///     tenant: hotel_id,
///     {
///         hotel_id: Uuid,
///         location: String,
///     }
/// );
///
/// let kiosk = Kiosk::new(
///     "Lobby West".to_string(),
///     "active".to_string(),
///     hotel_id,
///     "Lobby".to_string(),
/// );
/// ```
///
/// The `tenant: field` directive is optional; platform-wide entity types
/// (hotels, plans) omit it and keep the default `tenant_id() == None`.
/// Every declared extra field is reachable through `Record::field_value`,
/// which is what the filter and sort stages resolve field names against.
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $singular:expr, $plural:expr,
        searchable: [ $( $searchable:expr ),* $(,)? ],
        tenant: $tenant_field:ident,
        {
            $( $field:ident : $field_ty:ty ),* $(,)?
        }
    ) => {
        $crate::impl_record!(@define $type, $singular, $plural,
            [ $( $searchable ),* ],
            [ $tenant_field ],
            { $( $field : $field_ty ),* });
    };

    (
        $type:ident,
        $singular:expr, $plural:expr,
        searchable: [ $( $searchable:expr ),* $(,)? ],
        {
            $( $field:ident : $field_ty:ty ),* $(,)?
        }
    ) => {
        $crate::impl_record!(@define $type, $singular, $plural,
            [ $( $searchable ),* ],
            [ ],
            { $( $field : $field_ty ),* });
    };

    (@define $type:ident, $singular:expr, $plural:expr,
        [ $( $searchable:expr ),* ],
        [ $( $tenant_field:ident )? ],
        {
            $( $field:ident : $field_ty:ty ),*
        }
    ) => {
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Stable unique id
            pub id: ::uuid::Uuid,

            /// Entity type discriminator, serialized as `type`
            #[serde(rename = "type")]
            pub entity_type: String,

            /// Creation timestamp
            pub created_at: ::chrono::DateTime<::chrono::Utc>,

            /// Last-modification timestamp
            pub updated_at: ::chrono::DateTime<::chrono::Utc>,

            /// Soft-delete marker; `None` while the record is live
            pub deleted_at: Option<::chrono::DateTime<::chrono::Utc>>,

            /// Status string driving the consoles' badges and filters
            pub status: String,

            /// Human-readable display name
            pub name: String,
            $( pub $field : $field_ty ),*
        }

        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn entity_type(&self) -> &str {
                &self.entity_type
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }

            fn deleted_at(&self) -> Option<::chrono::DateTime<::chrono::Utc>> {
                self.deleted_at
            }

            fn status(&self) -> &str {
                &self.status
            }

            fn tenant_id(&self) -> Option<::uuid::Uuid> {
                None $( .or(Some(self.$tenant_field)) )?
            }
        }

        impl $crate::core::entity::Record for $type {
            fn name(&self) -> &str {
                &self.name
            }

            fn searchable_fields() -> &'static [&'static str] {
                &[ $( $searchable ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                use $crate::core::field::ToFieldValue;
                match field {
                    "id" => Some(self.id.to_field_value()),
                    "name" => Some(self.name.to_field_value()),
                    "status" => Some(self.status.to_field_value()),
                    "created_at" => Some(self.created_at.to_field_value()),
                    "updated_at" => Some(self.updated_at.to_field_value()),
                    $( stringify!($field) => Some(self.$field.to_field_value()), )*
                    _ => None,
                }
            }
        }

        impl $type {
            /// Build a fresh record with a new id and current timestamps
            pub fn new(
                name: String,
                status: String,
                $( $field: $field_ty ),*
            ) -> Self {
                Self {
                    id: ::uuid::Uuid::new_v4(),
                    entity_type: $singular.to_string(),
                    created_at: ::chrono::Utc::now(),
                    updated_at: ::chrono::Utc::now(),
                    deleted_at: None,
                    status,
                    name,
                    $( $field ),*
                }
            }

            /// Mark the record soft-deleted
            pub fn soft_delete(&mut self) {
                self.deleted_at = Some(::chrono::Utc::now());
                self.updated_at = ::chrono::Utc::now();
            }

            /// Clear the soft-delete marker
            pub fn restore(&mut self) {
                self.deleted_at = None;
                self.updated_at = ::chrono::Utc::now();
            }

            /// Bump the last-modification timestamp
            pub fn touch(&mut self) {
                self.updated_at = ::chrono::Utc::now();
            }

            /// Replace the status string and bump the timestamp
            pub fn set_status(&mut self, status: String) {
                self.status = status;
                self.touch();
            }
        }
    };
}
