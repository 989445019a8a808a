use image::{imageops, RgbaImage};
use zoomview_core::config::ResampleFilter;
use zoomview_core::geometry::{ImageSize, PixelRect, ViewportSize, WidgetPos};
use zoomview_core::render::RenderSurface;

#[derive(Clone, Copy, PartialEq, Eq)]
struct TextureKey {
    generation: u64,
    size: ImageSize,
    filter: ResampleFilter,
}

/// Holds the last resampled texture; resampling only reruns when the image,
/// the target size or the filter changes.
#[derive(Default)]
pub struct TextureCache {
    key: Option<TextureKey>,
    texture: Option<egui::TextureHandle>,
}

impl TextureCache {
    fn get(&self, key: TextureKey) -> Option<egui::TextureHandle> {
        match (&self.key, &self.texture) {
            (Some(k), Some(tex)) if *k == key => Some(tex.clone()),
            _ => None,
        }
    }
}

/// Renders into an egui panel. Widget coordinates are physical pixels
/// relative to the panel's top-left corner.
pub struct EguiSurface<'a> {
    pub ctx: &'a egui::Context,
    pub painter: &'a egui::Painter,
    pub rect: egui::Rect,
    pub pixels_per_point: f32,
    pub generation: u64,
    pub filter: ResampleFilter,
    pub overlay: egui::Color32,
    pub cache: &'a mut TextureCache,
}

impl EguiSurface<'_> {
    fn to_screen(&self, x: f32, y: f32) -> egui::Pos2 {
        self.rect.min + egui::vec2(x, y) / self.pixels_per_point
    }
}

/// Panel size in physical pixels.
pub fn viewport_in_pixels(rect: egui::Rect, pixels_per_point: f32) -> ViewportSize {
    ViewportSize::new(
        (rect.width() * pixels_per_point).round().max(0.0) as u32,
        (rect.height() * pixels_per_point).round().max(0.0) as u32,
    )
}

/// Screen position to panel-local physical pixels.
pub fn widget_pos(pos: egui::Pos2, rect: egui::Rect, pixels_per_point: f32) -> WidgetPos {
    let local = (pos - rect.min) * pixels_per_point;
    WidgetPos::new(local.x.floor() as i32, local.y.floor() as i32)
}

impl RenderSurface for EguiSurface<'_> {
    type Image = RgbaImage;
    type Bitmap = egui::TextureHandle;

    fn viewport_size(&self) -> ViewportSize {
        viewport_in_pixels(self.rect, self.pixels_per_point)
    }

    fn resample(&mut self, image: &RgbaImage, size: ImageSize) -> egui::TextureHandle {
        let key = TextureKey {
            generation: self.generation,
            size,
            filter: self.filter,
        };
        if let Some(texture) = self.cache.get(key) {
            return texture;
        }

        tracing::debug!(%size, filter = %self.filter, "Resampling image");
        let resampled = if image.dimensions() == (size.width, size.height) {
            image.clone()
        } else {
            imageops::resize(image, size.width, size.height, self.filter.filter_type())
        };
        let color = egui::ColorImage::from_rgba_unmultiplied(
            [size.width as usize, size.height as usize],
            resampled.as_raw(),
        );
        let options = if self.filter.is_smooth() {
            egui::TextureOptions::LINEAR
        } else {
            egui::TextureOptions::NEAREST
        };
        let texture = self.ctx.load_texture("zoomview-image", color, options);

        self.cache.key = Some(key);
        self.cache.texture = Some(texture.clone());
        texture
    }

    fn blit(&mut self, bitmap: &egui::TextureHandle, source: PixelRect, dest: PixelRect) {
        let [bw, bh] = bitmap.size();
        let source = source.clipped_to(bw as u32, bh as u32);
        if source.is_empty() || dest.is_empty() {
            return;
        }

        let (bw, bh) = (bw as f32, bh as f32);
        let uv = egui::Rect::from_min_max(
            egui::pos2(source.x as f32 / bw, source.y as f32 / bh),
            egui::pos2(
                (source.x + source.width) as f32 / bw,
                (source.y + source.height) as f32 / bh,
            ),
        );
        let dest_rect = egui::Rect::from_min_max(
            self.to_screen(dest.x as f32, dest.y as f32),
            self.to_screen((dest.x + dest.width) as f32, (dest.y + dest.height) as f32),
        );
        self.painter
            .image(bitmap.id(), dest_rect, uv, egui::Color32::WHITE);
    }

    fn stroke_rect(&mut self, from: WidgetPos, to: WidgetPos) {
        let rect = egui::Rect::from_two_pos(
            self.to_screen(from.x as f32, from.y as f32),
            self.to_screen(to.x as f32, to.y as f32),
        );
        self.painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, self.overlay),
            egui::epaint::StrokeKind::Middle,
        );
    }
}
