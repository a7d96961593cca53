//! Sidebar Record Indexing
//!
//! Decodes the flattened record lists of the sidebar document into
//! insertion-ordered, id-keyed lookup tables. The storage format interleaves
//! two encodings in the same list: a bare record carrying its id inline, and
//! a string id immediately followed by a wrapper record holding the payload
//! under a `value` key. Both normalize to the same shape before indexing.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::types::{ItemId, SpaceId};

/// Item lookup table, keyed by item id. Iteration follows insertion order.
pub type ItemIndex = IndexMap<ItemId, SidebarItem>;

/// Space lookup table, keyed by space id. Iteration follows insertion order.
pub type SpaceIndex = IndexMap<SpaceId, SpaceModel>;

/// A sidebar item record: a tab, folder, or container.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SidebarItem {
    pub id: Option<ItemId>,
    pub title: Option<String>,
    #[serde(rename = "parentID")]
    pub parent_id: Option<ItemId>,
    pub children_ids: Vec<ItemId>,
    pub created_at: Option<f64>,
    pub data: ItemData,
}

impl SidebarItem {
    /// Tab payload, if present and non-empty.
    pub fn tab(&self) -> Option<&TabData> {
        self.data.tab.as_ref().filter(|tab| !tab.is_empty())
    }
}

/// Typed payload carried by an item record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ItemData {
    pub tab: Option<TabData>,
}

/// Saved tab state embedded in an item record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabData {
    #[serde(rename = "savedURL")]
    pub saved_url: Option<String>,
    pub saved_title: Option<String>,
    pub time_last_active_at: Option<f64>,
}

impl TabData {
    pub fn is_empty(&self) -> bool {
        self.saved_url.is_none()
            && self.saved_title.is_none()
            && self.time_last_active_at.is_none()
    }
}

/// A space (workspace) record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpaceModel {
    pub id: Option<SpaceId>,
    pub title: Option<String>,
    #[serde(rename = "newContainerIDs")]
    pub new_container_ids: Vec<ContainerRef>,
}

/// One entry of a space's ordered container-reference list: either a plain
/// container id, a section marker object, or something we don't understand.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContainerRef {
    Id(ItemId),
    Marker(serde_json::Map<String, Value>),
    Other(Value),
}

/// Section boundary signaled by a marker entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMarker {
    Pinned,
    Unpinned,
}

impl ContainerRef {
    /// Section marker carried by this entry, if any.
    pub fn marker(&self) -> Option<SectionMarker> {
        match self {
            ContainerRef::Marker(map) if map.contains_key("pinned") => {
                Some(SectionMarker::Pinned)
            }
            ContainerRef::Marker(map) if map.contains_key("unpinned") => {
                Some(SectionMarker::Unpinned)
            }
            _ => None,
        }
    }
}

/// Record with an optionally embedded id, usable as an index entry.
pub trait IndexedRecord: DeserializeOwned {
    fn embedded_id(&self) -> Option<&str>;
}

impl IndexedRecord for SidebarItem {
    fn embedded_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IndexedRecord for SpaceModel {
    fn embedded_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One decoded entry of a raw record list.
///
/// Kept as an explicit two-variant step so both supported encodings stay
/// independently auditable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordEntry<'a> {
    /// A record with its id embedded in the payload.
    Inline(&'a Value),
    /// A string id paired with the record at the following position.
    Keyed(&'a str, &'a Value),
}

/// Walk a raw record list with a position cursor and split it into the two
/// supported encodings. String ids with no following record are dropped;
/// entries that are neither strings nor objects are skipped.
pub fn decode_entries(records: &[Value]) -> Vec<RecordEntry<'_>> {
    let mut entries = Vec::new();
    let mut pos = 0;
    while pos < records.len() {
        match &records[pos] {
            Value::String(id) => match records.get(pos + 1) {
                Some(next) if next.is_object() => {
                    entries.push(RecordEntry::Keyed(id, unwrap_payload(next)));
                    pos += 2;
                }
                _ => pos += 1,
            },
            record if record.is_object() => {
                entries.push(RecordEntry::Inline(unwrap_payload(record)));
                pos += 1;
            }
            _ => pos += 1,
        }
    }
    entries
}

/// Records may wrap their payload under a `value` key. A wrapped payload
/// that is not an object fails typed deserialization downstream and the
/// record is dropped.
fn unwrap_payload(record: &Value) -> &Value {
    record.get("value").unwrap_or(record)
}

/// Build the item index from the raw `items` list.
pub fn build_item_index(records: &[Value]) -> ItemIndex {
    build_index(records)
}

/// Build the space index from the raw `spaceModels` list.
pub fn build_space_index(records: &[Value]) -> SpaceIndex {
    build_index(records)
}

/// Index decoded entries under their id. Later entries with a duplicate id
/// overwrite earlier ones (the source is a patch log; the last state wins)
/// while keeping the first-insertion position, matching the source's
/// dictionary semantics. Records that fail typed deserialization are skipped.
fn build_index<T: IndexedRecord>(records: &[Value]) -> IndexMap<String, T> {
    let mut index = IndexMap::new();
    for entry in decode_entries(records) {
        match entry {
            RecordEntry::Keyed(id, payload) => {
                if let Some(record) = deserialize_record::<T>(payload) {
                    index.insert(id.to_string(), record);
                }
            }
            RecordEntry::Inline(payload) => {
                if let Some(record) = deserialize_record::<T>(payload) {
                    if let Some(id) = record.embedded_id() {
                        let id = id.to_string();
                        index.insert(id, record);
                    }
                }
            }
        }
    }
    index
}

fn deserialize_record<T: IndexedRecord>(payload: &Value) -> Option<T> {
    match serde_json::from_value(payload.clone()) {
        Ok(record) => Some(record),
        Err(err) => {
            debug!("skipping undecodable sidebar record: {}", err);
            None
        }
    }
}
