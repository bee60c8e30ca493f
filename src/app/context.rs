use crate::domain::DataLayout;
use crate::ports::{CountryCatalog, HdxClient, LayerReader};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CountryCatalog, H: HdxClient, L: LayerReader> {
    catalog: C,
    hdx: H,
    reader: L,
    layout: DataLayout,
}

impl<C: CountryCatalog, H: HdxClient, L: LayerReader> AppContext<C, H, L> {
    /// Create a new application context.
    pub fn new(catalog: C, hdx: H, reader: L, layout: DataLayout) -> Self {
        Self { catalog, hdx, reader, layout }
    }

    /// Get a reference to the country catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the HDX client.
    pub fn hdx(&self) -> &H {
        &self.hdx
    }

    /// Get a reference to the layer reader.
    pub fn reader(&self) -> &L {
        &self.reader
    }

    /// Get a reference to the data layout.
    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }
}
