//! One crop session: a decoded image, its laid-out size and the controller.
//!
//! The session is the single owner of everything a cropping page keeps
//! between events. Pointer input is ignored until an image has been loaded
//! and laid out, so a press that arrives while the file is still decoding
//! can never create or move a rectangle.
//!
//! # Lifecycle
//!
//! ```text
//! load_image ──► loaded ──layout──► ready ──pointer_* / layout──► ready
//!     ▲                                 │
//!     └──────────── load_image ◄────────┘
//! ```

use crate::config::CropperConfig;
use crate::decode::{decode_data_uri, decode_image, DecodedImage};
use crate::error::{CropError, Result};
use crate::export::{export, EncodedImage};
use crate::geometry::{CropController, CropRectangle, ImageDimensions, InteractionMode, Point, Size};
use crate::overlay::Overlay;
use crate::transform::to_source_space;

#[derive(Debug, Clone, Default)]
pub struct CropSession {
    config: CropperConfig,
    image: Option<DecodedImage>,
    displayed: Option<Size>,
    controller: CropController,
}

impl CropSession {
    pub fn new(config: CropperConfig) -> Self {
        let config = config.sanitized();
        let controller = CropController::new(&config);
        Self {
            config,
            image: None,
            displayed: None,
            controller,
        }
    }

    pub fn config(&self) -> &CropperConfig {
        &self.config
    }

    /// Decode encoded image bytes and make them the session's source.
    ///
    /// The previous image, rectangle and gesture are discarded first, so a
    /// failed decode leaves the session empty rather than half-replaced.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<ImageDimensions> {
        self.unload();
        let image = decode_image(bytes)?;
        Ok(self.load_decoded(image))
    }

    /// Decode a `data:` URI, as produced by a browser file reader.
    pub fn load_data_uri(&mut self, uri: &str) -> Result<ImageDimensions> {
        self.unload();
        let image = decode_data_uri(uri)?;
        Ok(self.load_decoded(image))
    }

    /// Adopt an already-decoded image.
    ///
    /// The rectangle stays absent until the next [`CropSession::layout`].
    pub fn load_decoded(&mut self, image: DecodedImage) -> ImageDimensions {
        self.unload();
        let dims = image.dimensions();
        log::info!("loaded {}x{} image", dims.width, dims.height);
        self.image = Some(image);
        dims
    }

    fn unload(&mut self) {
        self.image = None;
        self.displayed = None;
        self.controller.reset();
    }

    /// Record the displayed size of the image.
    ///
    /// The first call after a load places the initial square using the
    /// preset for `window_width`. Later calls re-fit the existing rectangle
    /// into the new size.
    ///
    /// # Errors
    ///
    /// Returns [`CropError::NotReady`] if no image is loaded or the displayed
    /// size is not positive.
    pub fn layout(&mut self, displayed: Size, window_width: f64) -> Result<CropRectangle> {
        if self.image.is_none() {
            return Err(CropError::NotReady("no image loaded"));
        }
        if !displayed.is_measured() {
            return Err(CropError::NotReady("image has no displayed size"));
        }

        let rect = match self.controller.fit_to_viewport(displayed) {
            Some(rect) => rect,
            None => {
                let preset = self.config.preset_for(window_width);
                log::debug!("window width {} selects {:?} preset", window_width, preset);
                self.controller
                    .initialize(displayed, self.config.sizing(preset))?
            }
        };
        self.displayed = Some(displayed);
        Ok(rect)
    }

    fn viewport(&self) -> Option<Size> {
        self.image.as_ref()?;
        self.displayed
    }

    pub fn pointer_down(&mut self, pointer: Point) -> InteractionMode {
        if self.viewport().is_none() {
            return InteractionMode::Idle;
        }
        self.controller.pointer_down(pointer)
    }

    /// Returns the new rectangle if the move changed it.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<CropRectangle> {
        let viewport = self.viewport()?;
        self.controller.on_pointer_move(pointer, viewport)
    }

    pub fn pointer_up(&mut self) {
        self.controller.end_gesture();
    }

    /// Leaving the viewport ends the gesture where it is.
    pub fn pointer_leave(&mut self) {
        self.controller.end_gesture();
    }

    pub fn crop_rectangle(&self) -> Option<CropRectangle> {
        self.controller.current_rectangle()
    }

    pub fn mode(&self) -> InteractionMode {
        self.controller.mode()
    }

    pub fn image_dimensions(&self) -> Option<ImageDimensions> {
        self.image.as_ref().map(DecodedImage::dimensions)
    }

    pub fn displayed_size(&self) -> Option<Size> {
        self.displayed
    }

    /// Whether [`CropSession::export`] has everything it needs.
    pub fn can_export(&self) -> bool {
        self.viewport().is_some() && self.crop_rectangle().is_some()
    }

    pub fn overlay(&self) -> Option<Overlay> {
        let viewport = self.viewport()?;
        let rect = self.crop_rectangle()?;
        Some(Overlay::new(rect, viewport, self.controller.handle_size()))
    }

    /// CSS cursor for a hovering pointer.
    pub fn cursor_at(&self, pointer: Point) -> &'static str {
        match self.mode() {
            InteractionMode::Dragging => "move",
            InteractionMode::Resizing(handle) => handle.cursor(),
            InteractionMode::Idle => self
                .overlay()
                .map_or("default", |overlay| overlay.cursor_at(pointer)),
        }
    }

    /// The current selection in native pixel units.
    pub fn source_rectangle(&self) -> Result<CropRectangle> {
        let image = self
            .image
            .as_ref()
            .ok_or(CropError::NotReady("no image loaded"))?;
        let displayed = self
            .displayed
            .ok_or(CropError::NotReady("image has not been laid out"))?;
        let rect = self
            .crop_rectangle()
            .ok_or(CropError::NotReady("no crop rectangle"))?;
        to_source_space(rect, displayed, image.dimensions())
    }

    /// Crop the source image to the current selection and encode it.
    ///
    /// The rectangle is mapped to source space against the displayed size
    /// recorded by the latest [`CropSession::layout`].
    pub fn export(&self) -> Result<EncodedImage> {
        let source = self.source_rectangle()?;
        let image = self
            .image
            .as_ref()
            .ok_or(CropError::NotReady("no image loaded"))?;
        export(image, &source)
    }
}
