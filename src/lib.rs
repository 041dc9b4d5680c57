#![doc = r#"
brandprep — prepares the web brand assets from two source images.

From a full logo and a small emblem ("mark") it writes:

- `solidus-logo.png`: the logo scaled proportionally to a target width.
- `solidus-mark.png`: a centered square crop of the mark, downscaled to a fixed size.

Both outputs are RGBA (transparency preserved), resampled with Lanczos3 and
saved as maximally compressed PNGs. The crate powers the `brandprep` CLI and can
be used directly.

Quick start: generate both assets
---------------------------------
```rust,no_run
use std::path::PathBuf;
use brandprep::{AssetParams, generate_assets};

fn main() -> brandprep::Result<()> {
    let params = AssetParams {
        logo_source: PathBuf::from("art/logo.png"),
        mark_source: PathBuf::from("art/emblem.png"),
        output_dir: PathBuf::from("public/assets"),
        ..AssetParams::default()
    };

    let report = generate_assets(&params, false)?;
    println!("logo {} / mark {}", report.logo.output, report.mark.output);
    Ok(())
}
```

In-memory transforms
--------------------
```rust
use brandprep::process_mark_to_buffer;
use image::DynamicImage;

fn main() -> brandprep::Result<()> {
    let (mark, info) = process_mark_to_buffer(DynamicImage::new_rgba8(300, 200), 64, 0.72)?;
    assert_eq!(mark.dimensions(), (64, 64));
    assert_eq!(info.crop.map(|c| (c.left, c.top, c.side)), Some((78, 28, 144)));
    Ok(())
}
```

Error handling
--------------
All public functions return `brandprep::Result<T>`. A missing source is reported
as `Error::MissingSource` before any image work starts:

```rust,no_run
use brandprep::{AssetParams, Error, generate_assets};

fn main() {
    match generate_assets(&AssetParams::default(), false) {
        Ok(_) => {}
        Err(Error::MissingSource { kind, path }) => eprintln!("no {kind} at {}", path.display()),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, geometry, resize/crop and the two pipelines.
- [`io`] — source decoding and PNG/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::AssetParams;
pub use error::{Error, Result};
pub use types::{AssetKind, CropRect, Dimensions, GeneratedAsset};

pub use api::{GenerationReport, generate_assets, process_logo_to_buffer, process_mark_to_buffer};
