// 🏷️ TrackingCategory - class or department used to slice reporting

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::entities::common::RemoteData;
use crate::enums::{ActivityStatus, CategoryType};
use crate::fields::{FieldKind, ItemKind};

typed_record! {
    pub struct TrackingCategory {
        "id" => id: String = FieldKind::String,
        "remote_id" => remote_id: String = FieldKind::String,
        "created_at" => created_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "modified_at" => modified_at: DateTime<FixedOffset> = FieldKind::DateTime,
        "name" => name: String = FieldKind::String,
        "status" => status: ActivityStatus = FieldKind::Enum(ActivityStatus::VALUES),
        "category_type" => category_type: CategoryType = FieldKind::Enum(CategoryType::VALUES),
        /// Id of the parent category, when nested
        "parent_category" => parent_category: String = FieldKind::String,
        "company" => company: String = FieldKind::String,
        "remote_was_deleted" => remote_was_deleted: bool = FieldKind::Boolean,
        "field_mappings" => field_mappings: Map<String, Value> = FieldKind::Object,
        "remote_data" => remote_data: Vec<RemoteData> =
            FieldKind::List(ItemKind::Record(RemoteData::schema)),
    }
}

impl TrackingCategory {
    pub fn is_top_level(&self) -> bool {
        self.parent_category.get().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::Nullable;
    use crate::record::TypedRecord;

    #[test]
    fn test_tracking_category_hierarchy() {
        let child =
            TrackingCategory::from_json(r#"{"name":"EMEA","category_type":"DEPARTMENT","parent_category":"tc-1"}"#)
                .unwrap();
        assert_eq!(child.category_type, Nullable::Set(CategoryType::Department));
        assert!(!child.is_top_level());

        let root = TrackingCategory::from_json(r#"{"name":"Sales","parent_category":null}"#).unwrap();
        assert!(root.is_top_level());
    }

    #[test]
    fn test_tracking_category_lowercase_status_is_unrecognized() {
        let category = TrackingCategory::from_json(r#"{"status":"active"}"#).unwrap();
        assert_eq!(category.status, Nullable::Set(ActivityStatus::Unrecognized("active".to_string())));
        assert!(category.validate().is_err());
    }
}
