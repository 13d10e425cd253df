use alloc::sync::Arc;

/// Estimate used when neither an explicit estimate nor a fixed item size is available.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: f64 = 50.0;

/// Returns `estimate` if it is positive and finite, else [`DEFAULT_ESTIMATED_ITEM_SIZE`].
pub(crate) fn sanitize_estimate(estimate: f64) -> f64 {
    if estimate.is_finite() && estimate > 0.0 {
        estimate
    } else {
        DEFAULT_ESTIMATED_ITEM_SIZE
    }
}

/// The normalized size source: returns the extent of item `i`, or `None` if it has none.
///
/// Returned values are validated on measurement; anything negative or non-finite is rejected
/// with [`crate::Error::InvalidSize`].
pub type ItemSizeGetter = Arc<dyn Fn(usize) -> Option<f64> + Send + Sync>;

/// The shapes a host may supply item sizes in.
#[derive(Clone)]
pub enum ItemSize {
    /// Every item has the same extent.
    Fixed(f64),
    /// Per-index lookup table. Indexes past the end have no size.
    Table(Arc<[f64]>),
    /// Arbitrary callback, e.g. backed by measured layout.
    Getter(Arc<dyn Fn(usize) -> f64 + Send + Sync>),
}

impl ItemSize {
    pub fn getter(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Getter(Arc::new(f))
    }

    /// Collapses the input shape into a single `index -> size` function.
    pub fn into_getter(self) -> ItemSizeGetter {
        match self {
            Self::Fixed(size) => Arc::new(move |_| Some(size)),
            Self::Table(sizes) => Arc::new(move |i| sizes.get(i).copied()),
            Self::Getter(f) => Arc::new(move |i| Some(f(i))),
        }
    }

    /// Resolves the estimate for unmeasured items.
    ///
    /// Prefers a positive `explicit` estimate, then a positive fixed size, then
    /// [`DEFAULT_ESTIMATED_ITEM_SIZE`].
    pub fn estimated_item_size(&self, explicit: Option<f64>) -> f64 {
        if let Some(e) = explicit.filter(|e| *e > 0.0) {
            return e;
        }
        match self {
            Self::Fixed(size) if *size > 0.0 => *size,
            _ => DEFAULT_ESTIMATED_ITEM_SIZE,
        }
    }
}

impl From<f64> for ItemSize {
    fn from(size: f64) -> Self {
        Self::Fixed(size)
    }
}

impl From<alloc::vec::Vec<f64>> for ItemSize {
    fn from(sizes: alloc::vec::Vec<f64>) -> Self {
        Self::Table(sizes.into())
    }
}

impl From<&[f64]> for ItemSize {
    fn from(sizes: &[f64]) -> Self {
        Self::Table(sizes.into())
    }
}

impl core::fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Table(t) => f.debug_tuple("Table").field(&t.len()).finish(),
            Self::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

/// Configuration for [`crate::SizeIndex`].
///
/// Cheap to clone: the size getter is held in an `Arc`.
pub struct SizeIndexOptions {
    pub item_count: usize,
    pub item_size_getter: ItemSizeGetter,
    /// Placeholder extent for items past the measurement frontier.
    ///
    /// A value that is not positive and finite is replaced with [`DEFAULT_ESTIMATED_ITEM_SIZE`]
    /// when the index is built or updated.
    pub estimated_item_size: f64,
}

impl Clone for SizeIndexOptions {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            item_size_getter: Arc::clone(&self.item_size_getter),
            estimated_item_size: self.estimated_item_size,
        }
    }
}

impl SizeIndexOptions {
    pub fn new(
        item_count: usize,
        item_size_getter: impl Fn(usize) -> Option<f64> + Send + Sync + 'static,
        estimated_item_size: f64,
    ) -> Self {
        Self {
            item_count,
            item_size_getter: Arc::new(item_size_getter),
            estimated_item_size,
        }
    }

    /// Builds options from any [`ItemSize`] shape, resolving the estimate with
    /// [`ItemSize::estimated_item_size`].
    pub fn from_item_size(
        item_count: usize,
        item_size: impl Into<ItemSize>,
        estimated_item_size: Option<f64>,
    ) -> Self {
        let item_size = item_size.into();
        let estimated_item_size = item_size.estimated_item_size(estimated_item_size);
        Self {
            item_count,
            item_size_getter: item_size.into_getter(),
            estimated_item_size,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size_getter = item_size.into().into_getter();
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }
}

impl core::fmt::Debug for SizeIndexOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SizeIndexOptions")
            .field("item_count", &self.item_count)
            .field("estimated_item_size", &self.estimated_item_size)
            .finish_non_exhaustive()
    }
}

/// A partial replacement for [`SizeIndexOptions`]; `None` fields are left untouched.
#[derive(Clone, Default)]
pub struct ConfigUpdate {
    pub item_count: Option<usize>,
    pub item_size_getter: Option<ItemSizeGetter>,
    pub estimated_item_size: Option<f64>,
}

impl ConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn item_size(mut self, item_size: impl Into<ItemSize>) -> Self {
        self.item_size_getter = Some(item_size.into().into_getter());
        self
    }

    pub fn item_size_getter(
        mut self,
        f: impl Fn(usize) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.item_size_getter = Some(Arc::new(f));
        self
    }

    pub fn estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = Some(estimated_item_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item_count.is_none()
            && self.item_size_getter.is_none()
            && self.estimated_item_size.is_none()
    }
}

impl core::fmt::Debug for ConfigUpdate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigUpdate")
            .field("item_count", &self.item_count)
            .field("item_size_getter", &self.item_size_getter.as_ref().map(|_| ".."))
            .field("estimated_item_size", &self.estimated_item_size)
            .finish()
    }
}
