//! Pipeline orchestration: load, resolve, build, render.

use log::debug;

use crate::{
    builder::{self, FieldDescriptor},
    error::Result,
    loader::DocumentLoader,
    render::HtmlRenderer,
    resolver,
};

/// End-to-end form pipeline over a document loader.
pub struct FormPipeline<L> {
    loader: L,
}

impl<L: DocumentLoader> FormPipeline<L> {
    /// Creates a pipeline fetching documents through `loader`.
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Loads the root document at `path`, resolves every reference, and
    /// builds the field descriptor tree.
    ///
    /// # Errors
    ///
    /// Fails fast on the first load failure or detected reference cycle; no
    /// partial tree is ever returned.
    pub async fn build(&self, path: &str) -> Result<Vec<FieldDescriptor>> {
        debug!("loading root schema `{path}`");
        let root = self.loader.load(path).await?;
        let resolved = resolver::resolve(&root, &self.loader).await?;
        Ok(builder::build(&resolved))
    }

    /// Runs the pipeline and renders the result as an HTML form.
    pub async fn render_html(&self, path: &str) -> Result<String> {
        let fields = self.build(path).await?;
        let mut renderer = HtmlRenderer::new();
        renderer.render(&fields);
        Ok(renderer.into_html())
    }
}
