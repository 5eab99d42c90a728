//! Group Records
//!
//! Account groups exactly as the backend returns them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend identifier of a group
pub type GroupId = String;

/// Accounting category of a group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupType {
    Assets,
    Liability,
    Expenses,
    Income,
    /// A type this client does not know, kept verbatim so saving the group
    /// sends it back unchanged
    Other(String),
}

impl GroupType {
    /// Types offered in filters and editors
    pub const SELECTABLE: [GroupType; 4] = [
        GroupType::Assets,
        GroupType::Liability,
        GroupType::Expenses,
        GroupType::Income,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            GroupType::Assets => "Assets",
            GroupType::Liability => "Liability",
            GroupType::Expenses => "Expenses",
            GroupType::Income => "Income",
            GroupType::Other(raw) => raw,
        }
    }

    /// One of the selectable types, case-insensitively
    pub fn parse(value: &str) -> Option<GroupType> {
        Self::SELECTABLE
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .cloned()
    }

    /// Backend value; unknown strings become `Other`
    pub fn from_wire(value: &str) -> GroupType {
        Self::SELECTABLE
            .iter()
            .find(|t| t.as_str() == value)
            .cloned()
            .unwrap_or_else(|| GroupType::Other(value.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, GroupType::Other(_))
    }
}

impl Serialize for GroupType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GroupType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(GroupType::from_wire(&raw))
    }
}

/// Reference to a parent group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: GroupId,
}

/// A node of the chart-of-accounts hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    #[serde(alias = "_id", deserialize_with = "id_from_string_or_number")]
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub group_type: Option<GroupType>,
    #[serde(default, deserialize_with = "deserialize_parent")]
    pub parent_group: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_predefined: Option<bool>,
}

impl GroupRecord {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            group_type: None,
            parent_group: None,
            is_active: None,
            is_predefined: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<GroupId>) -> Self {
        self.parent_group = Some(ParentRef { id: parent_id.into() });
        self
    }

    pub fn with_type(mut self, group_type: GroupType) -> Self {
        self.group_type = Some(group_type);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_group.as_ref().map(|p| p.id.as_str())
    }

    /// Missing flag means active
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }

    pub fn is_predefined(&self) -> bool {
        self.is_predefined.unwrap_or(false)
    }

    /// Predefined groups are part of the base chart and cannot be removed
    pub fn is_deletable(&self) -> bool {
        !self.is_predefined()
    }

    /// The backend slug, or one derived from the name when the backend has none
    pub fn effective_slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_ascii_lowercase(),
            _ => slugify(&self.name),
        }
    }
}

/// Lower-case the name and join its alphanumeric runs with `-`
///
/// "Sundry Debtors" -> "sundry-debtors", "  Loans (Liability) " -> "loans-liability"
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(u64),
}

impl From<IdRepr> for GroupId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Text(s) => s,
            IdRepr::Number(n) => n.to_string(),
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<GroupId, D::Error>
where
    D: Deserializer<'de>,
{
    IdRepr::deserialize(deserializer).map(GroupId::from)
}

/// `parentGroup` arrives as `null`, `{ "id": ... }` or a bare id depending on
/// whether the backend populated the reference.
fn deserialize_parent<'de, D>(deserializer: D) -> Result<Option<ParentRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ParentRepr {
        Populated(ParentRef),
        Bare(IdRepr),
    }

    let parent = match Option::<ParentRepr>::deserialize(deserializer)? {
        None => None,
        Some(ParentRepr::Populated(parent)) => Some(parent),
        Some(ParentRepr::Bare(id)) => Some(ParentRef { id: id.into() }),
    };
    Ok(parent.filter(|p| !p.id.is_empty()))
}
