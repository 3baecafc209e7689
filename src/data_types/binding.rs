use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Capability exposed by host data sources that hand out their rows on demand.
pub trait DataAccessor {
    /// Returns the current data held by the source.
    fn get_data(&self) -> eyre::Result<Binding>;

    /// Named container-like field (`data`, `dataset`, `values`, `rows`, `resultSet`).
    fn field(&self, _name: &str) -> Option<Binding> {
        None
    }
}

/// A value of unknown shape handed over by the host on every update.
#[derive(Clone, Default)]
pub enum Binding {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Sequence(Rc<Sequence>),
    Record(Rc<Record>),
    Accessor(Rc<dyn DataAccessor>),
}

/// Ordered list node. Shared so that graphs may reference it more than once.
#[derive(Default)]
pub struct Sequence {
    items: RefCell<Vec<Binding>>,
}

impl Sequence {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn from_vec(items: Vec<Binding>) -> Rc<Self> {
        Rc::new(Self {
            items: RefCell::new(items),
        })
    }

    pub fn push(&self, item: Binding) {
        self.items.borrow_mut().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Snapshot of the elements in order.
    pub fn items(&self) -> Vec<Binding> {
        self.items.borrow().clone()
    }
}

/// Keyed node. Keys keep insertion order.
#[derive(Default)]
pub struct Record {
    entries: RefCell<Vec<(String, Binding)>>,
}

impl Record {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Inserts or replaces `key`. A replaced key keeps its original position.
    pub fn insert(&self, key: impl Into<String>, value: Binding) {
        let key = key.into();
        let mut entries = self.entries.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<Binding> {
        self.entries
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of the entries in enumeration order.
    pub fn entries(&self) -> Vec<(String, Binding)> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Binding {
    pub fn record<K: Into<String>>(entries: impl IntoIterator<Item = (K, Binding)>) -> Self {
        let record = Record::new();
        for (k, v) in entries {
            record.insert(k, v);
        }
        Self::Record(record)
    }

    pub fn sequence(items: impl IntoIterator<Item = Binding>) -> Self {
        Self::Sequence(Sequence::from_vec(items.into_iter().collect()))
    }

    pub fn accessor(source: impl DataAccessor + 'static) -> Self {
        Self::Accessor(Rc::new(source))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Finite number carried directly by this node, if any.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Scalar coercion used for the fallback `value` property.
    ///
    /// Text is parsed after trimming; booleans count as 1/0. Containers and
    /// null never coerce.
    pub fn coerce_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            _ => return None,
        };
        n.is_finite().then_some(n)
    }

    /// Address of the shared allocation behind container nodes.
    pub(crate) fn identity(&self) -> Option<*const ()> {
        match self {
            Self::Sequence(s) => Some(Rc::as_ptr(s) as *const ()),
            Self::Record(r) => Some(Rc::as_ptr(r) as *const ()),
            Self::Accessor(a) => Some(Rc::as_ptr(a) as *const ()),
            _ => None,
        }
    }

    /// Named container field, looked up on records and accessors only.
    pub fn field(&self, name: &str) -> Option<Binding> {
        match self {
            Self::Record(r) => r.get(name),
            Self::Accessor(a) => a.field(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Containers print shallowly; graphs may be cyclic.
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Sequence(s) => write!(f, "Sequence(len={})", s.len()),
            Self::Record(r) => write!(f, "Record(keys={:?})", r.keys()),
            Self::Accessor(_) => write!(f, "Accessor"),
        }
    }
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Binding {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<serde_json::Value> for Binding {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::sequence(items.into_iter().map(Binding::from)),
            Value::Object(map) => Self::record(map.into_iter().map(|(k, v)| (k, Binding::from(v)))),
        }
    }
}

impl From<&serde_json::Value> for Binding {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}
