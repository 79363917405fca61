//! Particle Field entry point
//!
//! In the browser this attaches the landing page behaviours and starts the
//! background animation. Natively it runs the field headlessly and logs
//! frame statistics.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use particle_field::FieldSettings;
    use particle_field::platform::{page, web};

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {e}").into());
    }

    log::info!("Particle Field starting...");

    let settings = match web::find_canvas(web::CANVAS_ID) {
        Ok(canvas) => {
            let settings = FieldSettings::load_from(&canvas);
            if let Err(e) = web::launch(canvas, settings.clone()) {
                // The page still works without its background
                log::error!("Particle field unavailable: {e}");
            }
            settings
        }
        Err(e) => {
            log::info!("No particle field on this page ({e})");
            FieldSettings::default()
        }
    };

    if let Err(e) = page::setup(&settings) {
        log::error!("Page behaviours unavailable: {e}");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use particle_field::FieldSettings;
    use particle_field::platform::FieldDriver;
    use particle_field::renderer::RecordingSurface;

    env_logger::init();
    log::info!("Particle Field (native) starting...");

    // particle-field [frames] [settings.json]
    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let settings = match args.next() {
        Some(path) => FieldSettings::load_from(std::path::Path::new(&path)),
        None => FieldSettings::default(),
    };

    let (width, height) = (1280.0, 720.0);
    let mut driver = FieldDriver::new(settings, width, width, height, 12345);
    let mut surface = RecordingSurface::new();

    // Sweep a pointer across the middle for the first half, then let go
    let sweep = frames / 2;
    for i in 0..frames {
        let pointer = (i < sweep).then(|| {
            let t = i as f32 / sweep.max(1) as f32;
            Vec2::new(t * width, height / 2.0)
        });
        driver.set_pointer(pointer);
        let stats = driver.frame(&mut surface);

        if i % 60 == 0 || i + 1 == frames {
            log::info!(
                "frame {:>5}: {} particles, {:>4} connections, max displacement {:.3}",
                driver.total_frames(),
                stats.particles,
                stats.connections,
                driver.field().max_displacement()
            );
        }
    }

    println!(
        "Ran {} frames, final max displacement {:.6}",
        driver.total_frames(),
        driver.field().max_displacement()
    );
}
