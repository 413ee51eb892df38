use crate::{
    codec,
    view::{View, ViewMut},
    Config, Error, Field, FieldDescriptor, Layout, Value,
};
use bytes::BytesMut;
use tracing::debug;

/// A fixed-layout record backed by a single byte buffer.
///
/// The buffer is allocated (zeroed) once at construction and never resized.
/// Each field is addressed by name and read or written through a view over its
/// own byte range.
#[derive(Clone, Debug)]
pub struct Structure {
    cfg: Config,
    layout: Layout,
    buffer: BytesMut,
}

impl Structure {
    /// Builds a structure from `descriptors` with the default [Config].
    pub fn new<I>(descriptors: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        Self::init(Config::default(), descriptors)
    }

    /// Builds a structure from `descriptors` with the provided [Config].
    pub fn init<I>(cfg: Config, descriptors: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let layout = Layout::build(descriptors)?;
        Ok(Self::from_layout(cfg, layout))
    }

    /// Allocates a zeroed buffer for an already validated [Layout].
    pub fn from_layout(cfg: Config, layout: Layout) -> Self {
        let buffer = BytesMut::zeroed(layout.size());
        debug!(
            fields = layout.len(),
            size = layout.size(),
            overflow = ?cfg.overflow,
            "initialized structure"
        );
        Self {
            cfg,
            layout,
            buffer,
        }
    }

    /// Stores `value` in the field named `name`.
    ///
    /// Text fields keep only as many UTF-16 code units as their capacity allows
    /// (unless configured with [crate::Overflow::Reject]); integers wrap to 16 bits.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), Error> {
        let field = Self::lookup(&self.layout, name)?;
        let mut view = ViewMut::new(&mut self.buffer[field.range()]);
        codec::write(field, &mut view, &value.into(), self.cfg.overflow)
    }

    /// Returns the value stored in the field named `name`.
    ///
    /// Text fields are returned at full capacity: slots never written read back
    /// as NUL characters.
    pub fn get(&self, name: &str) -> Result<Value, Error> {
        let field = Self::lookup(&self.layout, name)?;
        Ok(codec::read(field.encoding, self.slots(field)))
    }

    /// Returns a read-only view over the slots of the field named `name`.
    pub fn view(&self, name: &str) -> Result<View<'_>, Error> {
        let field = Self::lookup(&self.layout, name)?;
        Ok(self.slots(field))
    }

    /// Zeroes every field without reallocating.
    pub fn clear(&mut self) {
        ViewMut::new(&mut self.buffer[..]).clear();
    }

    /// Returns the layout of the structure.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the backing buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    fn lookup<'a>(layout: &'a Layout, name: &str) -> Result<&'a Field, Error> {
        layout
            .field(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    fn slots(&self, field: &Field) -> View<'_> {
        View::new(&self.buffer[field.range()])
    }
}
