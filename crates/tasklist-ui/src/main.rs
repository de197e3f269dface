mod app;
mod components;
mod storage;

use anyhow::{
  Context,
  anyhow
};

/// Id of the element the page markup reserves for the task list.
const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  match mount_point() {
    | Ok(root) => {
      tracing::info!(
        mount = MOUNT_ID,
        "mounting task list"
      );
      yew::Renderer::<app::App>::with_root(
        root
      )
      .render();
    }
    | Err(error) => {
      tracing::warn!(
        error = %format!("{error:#}"),
        "mount element unavailable; rendering into <body>"
      );
      yew::Renderer::<app::App>::new()
        .render();
    }
  }
}

fn mount_point()
-> anyhow::Result<web_sys::Element> {
  let document = web_sys::window()
    .and_then(|window| window.document())
    .ok_or_else(|| {
      anyhow!("no document to mount into")
    })?;

  document
    .get_element_by_id(MOUNT_ID)
    .with_context(|| {
      format!(
        "page has no #{MOUNT_ID} element"
      )
    })
}
