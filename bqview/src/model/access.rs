/*!
Access entries of a dataset's access control list.

An entry grants a role to exactly one principal. Authorized view entries
carry no role; the referenced view gains read access to the dataset's data.
*/

use serde_derive::{Deserialize, Serialize};

use super::reference::{DatasetReference, TableReference};

/// One entry of a dataset access control list.
///
/// Exactly one of the grantee fields is populated. Entries compare by
/// structural equality, which is what the permission sync uses both for the
/// removal predicate and for the duplicate check.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessEntry {
    /// Role granted to the principal, absent for authorized view entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Email address of a user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_by_email: Option<String>,
    /// Email address of a Google group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_email: Option<String>,
    /// Workspace domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Special group, e.g. `projectReaders`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_group: Option<String>,
    /// IAM member, e.g. `allUsers`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_member: Option<String>,
    /// Authorized view granted read access to the dataset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<TableReference>,
}

impl AccessEntry {
    /// An authorized view entry for the given view.
    pub fn view(view: TableReference) -> Self {
        AccessEntry {
            view: Some(view),
            ..Default::default()
        }
    }
    /// Whether this entry authorizes a view that lives in the given dataset.
    ///
    /// This is the removal predicate of the permission sync: it matches on
    /// the parsed view reference, not on a stringified form of the entry.
    pub fn grants_view_in(&self, dataset: &DatasetReference) -> bool {
        self.view.as_ref().is_some_and(|view| {
            view.project_id == dataset.project_id && view.dataset_id == dataset.dataset_id
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AccessEntry;
    use crate::model::reference::{DatasetReference, TableReference};

    #[test]
    fn test_view_entry_wire_form() {
        let entry = AccessEntry::view(TableReference::parse("views-prod.sales.orders").unwrap());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "view": {
                    "projectId": "views-prod",
                    "datasetId": "sales",
                    "tableId": "orders"
                }
            })
        );
    }
    #[test]
    fn test_user_entry_roundtrip() {
        let json = r#"{"role":"OWNER","userByEmail":"owner@example.com"}"#;
        let entry: AccessEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.role.as_deref(), Some("OWNER"));
        assert_eq!(entry.user_by_email.as_deref(), Some("owner@example.com"));
        assert!(entry.view.is_none());
    }
    #[test]
    fn test_grants_view_in() {
        let entry = AccessEntry::view(TableReference::parse("views-prod.sales.orders").unwrap());
        assert!(entry.grants_view_in(&DatasetReference::parse("views-prod.sales").unwrap()));
        assert!(!entry.grants_view_in(&DatasetReference::parse("views-prod.finance").unwrap()));
        assert!(!entry.grants_view_in(&DatasetReference::parse("other.sales").unwrap()));

        let user = AccessEntry {
            role: Some("READER".to_owned()),
            user_by_email: Some("analyst@example.com".to_owned()),
            ..Default::default()
        };
        assert!(!user.grants_view_in(&DatasetReference::parse("views-prod.sales").unwrap()));
    }
}
