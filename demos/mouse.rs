use iocraft::prelude::*;
use iocraft_hooks::prelude::*;

#[component]
fn App(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let position = hooks.use_mouse_position();
    let mut trail = hooks.use_array(Vec::new);
    let mut should_exit = hooks.use_toggle(false);

    hooks.use_key_press(KeyCode::Char('q'), move || should_exit.on());
    hooks.use_update_effect(
        move || {
            trail.push(position);
            if trail.len() > 5 {
                trail.remove(0);
            }
        },
        position,
    );

    if should_exit.get() {
        system.exit();
    }

    let trail = trail
        .to_vec()
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    element! {
        View(flex_direction: FlexDirection::Column, padding: 1) {
            Text(content: "Move the mouse. Press \"q\" to exit.")
            Text(content: format!("pointer: {}, {}", position.x, position.y), color: Color::Green)
            Text(content: format!("trail: {}", trail), color: Color::Grey)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    smol::block_on(element!(App).fullscreen())?;
    Ok(())
}
