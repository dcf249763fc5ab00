// Host-side tests for the renderer's backend and culling choices.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod options {
    include!("../src/render/options.rs");
}

use options::*;

#[test]
fn instance_keeps_webgl_available_next_to_webgpu() {
    let desc = instance_descriptor();
    assert!(desc.backends.contains(wgpu::Backends::GL));
    assert!(desc.backends.contains(wgpu::Backends::BROWSER_WEBGPU));
}

#[test]
fn panels_cull_back_faces() {
    assert_eq!(PANEL_CULL_MODE, Some(wgpu::Face::Back));
}
