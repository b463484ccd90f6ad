use std::sync::Arc;

use anyhow::Context;
use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, sleeper::Sleeper};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    sleeper: Sleeper,
    failure: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let sleeper = Sleeper::from_fps(config.target_fps);

        Self {
            config,
            resumed_window: None,
            sleeper,
            failure: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.failure = Some(error);
        event_loop.exit();
    }

    fn open(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        log::info!(
            "opened {}x{} window ({}x{} physical)",
            self.config.width,
            self.config.height,
            window.inner_size().width,
            window.inner_size().height
        );

        Ok(ResumedWindow { window, pixels })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        let PhysicalSize { width, height } = window.inner_size();
        if width == 0 || height == 0 {
            // Minimized; nothing to draw into.
            return Ok(());
        }

        let next_frame = RenderFrame {
            width,
            height,
            buffer: pixels.frame_mut(),
        };

        (self.config.draw_callback)(next_frame);

        pixels.render().context("Rendering with pixels")?;

        // FIXME: Sleeping here stalls the whole event loop, so resizes are handled a frame late.
        self.sleeper.sleep();
        window.request_redraw();

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        if width == 0 || height == 0 {
            return Ok(());
        }

        pixels
            .resize_surface(width, height)
            .context("Resizing surface")?;
        pixels
            .resize_buffer(width, height)
            .context("Resizing pixel buffer")?;
        window.request_redraw();

        Ok(())
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.open(event_loop) {
            Ok(resumed_window) => {
                resumed_window.window.request_redraw();
                self.resumed_window = Some(resumed_window);
            }
            Err(error) => self.fail(event_loop, error),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let result = match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(PhysicalSize { width, height }) => self.resize(width, height),
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                event_loop.exit();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(error) = result {
            self.fail(event_loop, error);
        }
    }
}
