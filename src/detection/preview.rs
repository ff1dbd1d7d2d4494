//! Preview resource ownership.
//!
//! A [`PreviewManager`] holds at most one live handle. Every acquisition is
//! paired with exactly one release: on replacement, on clear, and on drop.

use std::fmt;

use super::error::PreviewError;
use super::types::SelectedFile;

/// Something that can turn a selected file into a revocable, renderable handle.
pub trait PreviewSource {
    type Handle: Clone + PartialEq + fmt::Debug;

    fn acquire(&mut self, file: &SelectedFile) -> Result<Self::Handle, PreviewError>;

    fn release(&mut self, handle: Self::Handle);
}

/// Exclusive owner of the live preview handle.
pub struct PreviewManager<S: PreviewSource> {
    source: S,
    live: Option<S::Handle>,
}

impl<S: PreviewSource> PreviewManager<S> {
    pub fn new(source: S) -> Self {
        Self { source, live: None }
    }

    /// Release the current handle, then acquire one for `file`.
    ///
    /// On acquisition failure nothing is left live.
    pub fn replace(&mut self, file: &SelectedFile) -> Result<&S::Handle, PreviewError> {
        self.clear();
        let handle = self.source.acquire(file)?;
        Ok(self.live.insert(handle))
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.live.take() {
            self.source.release(handle);
        }
    }

    pub fn current(&self) -> Option<&S::Handle> {
        self.live.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: PreviewSource> Drop for PreviewManager<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<S: PreviewSource + fmt::Debug> fmt::Debug for PreviewManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewManager")
            .field("source", &self.source)
            .field("live", &self.live)
            .finish()
    }
}

/// Browser preview source backed by `URL.createObjectURL`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectUrlSource;

impl PreviewSource for ObjectUrlSource {
    type Handle = String;

    fn acquire(&mut self, file: &SelectedFile) -> Result<String, PreviewError> {
        let array = js_sys::Uint8Array::from(file.bytes.as_ref());
        let parts = js_sys::Array::of1(&array);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.mime_type);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| PreviewError::Unavailable(format!("{:?}", e)))?;

        web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| PreviewError::Unavailable(format!("{:?}", e)))
    }

    fn release(&mut self, handle: String) {
        if let Err(e) = web_sys::Url::revoke_object_url(&handle) {
            web_sys::console::warn_1(&format!("Failed to revoke preview {}: {:?}", handle, e).into());
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{leaf, FakeSource};
    use super::*;

    #[test]
    fn test_replace_releases_previous_before_acquiring() {
        let mut manager = PreviewManager::new(FakeSource::default());

        assert_eq!(manager.replace(&leaf("a.jpg")).copied(), Ok(1));
        assert_eq!(manager.replace(&leaf("b.jpg")).copied(), Ok(2));

        assert_eq!(manager.source().live, vec![2]);
        assert_eq!(manager.source().released, vec![1]);
        assert_eq!(manager.current(), Some(&2));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut manager = PreviewManager::new(FakeSource::default());
        manager.replace(&leaf("a.jpg")).unwrap();

        manager.clear();
        manager.clear();

        assert!(manager.current().is_none());
        assert!(manager.source().live.is_empty());
        assert_eq!(manager.source().released, vec![1]);
    }

    #[test]
    fn test_failed_replace_still_releases_old_handle() {
        let mut manager = PreviewManager::new(FakeSource::default());
        manager.replace(&leaf("a.jpg")).unwrap();

        manager.source_mut().fail_next = true;
        assert!(manager.replace(&leaf("b.jpg")).is_err());

        assert!(manager.current().is_none());
        assert!(manager.source().live.is_empty());
        assert_eq!(manager.source().released, vec![1]);
    }

    #[test]
    fn test_drop_releases_live_handle() {
        use std::cell::Cell;
        use std::rc::Rc;

        #[derive(Debug)]
        struct Probe(Rc<Cell<u32>>);

        impl PreviewSource for Probe {
            type Handle = u8;

            fn acquire(&mut self, _file: &SelectedFile) -> Result<u8, PreviewError> {
                Ok(7)
            }

            fn release(&mut self, _handle: u8) {
                self.0.set(self.0.get() + 1);
            }
        }

        let releases = Rc::new(Cell::new(0));
        {
            let mut manager = PreviewManager::new(Probe(releases.clone()));
            manager.replace(&leaf("a.jpg")).unwrap();
        }
        assert_eq!(releases.get(), 1);
    }
}
