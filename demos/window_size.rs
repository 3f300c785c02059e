use iocraft::prelude::*;
use iocraft_hooks::prelude::*;

#[component]
fn App(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let size = hooks.use_window_size();
    let mut should_exit = hooks.use_toggle(false);
    hooks.use_key_press(KeyCode::Char('q'), move || should_exit.on());

    if should_exit.get() {
        system.exit();
    }

    element! {
        View(
            width: 100pct,
            height: 100pct,
            border_style: BorderStyle::Round,
            border_color: Color::Cyan,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            flex_direction: FlexDirection::Column,
        ) {
            Text(content: format!("{} x {}", size.width, size.height), weight: Weight::Bold)
            Text(content: "Resize the terminal. Press \"q\" to exit.", color: Color::Grey)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    smol::block_on(element!(App).fullscreen())?;
    Ok(())
}
