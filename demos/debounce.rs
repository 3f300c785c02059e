use iocraft::prelude::*;
use iocraft_hooks::prelude::*;
use std::time::Duration;

#[component]
fn App(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let mut input = hooks.use_state(String::new);
    let mut echoed = hooks.use_state(String::new);
    let mut show_hint = hooks.use_toggle(true);
    let mut should_exit = hooks.use_toggle(false);

    hooks.use_timeout(move || show_hint.off(), Duration::from_secs(3));
    hooks.use_key_down(move |event| match event.code {
        KeyCode::Char(c) => {
            let mut value = input.read().to_string();
            value.push(c);
            input.set(value);
        }
        KeyCode::Backspace => {
            let mut value = input.read().to_string();
            value.pop();
            input.set(value);
        }
        KeyCode::Esc => should_exit.on(),
        _ => {}
    });

    let current = input.read().to_string();
    hooks.use_debounce(
        {
            let current = current.clone();
            move || echoed.set(current.clone())
        },
        Duration::from_millis(500),
        &current,
    );

    if should_exit.get() {
        system.exit();
    }

    element! {
        View(flex_direction: FlexDirection::Column, padding: 1) {
            #(show_hint.get().then(|| element! {
                Text(content: "Type something. The echo updates once you pause. Press Esc to exit.", color: Color::Grey)
            }))
            Text(content: format!("input: {}", current))
            Text(content: format!("echo:  {}", echoed.read().as_str()), color: Color::Blue)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    smol::block_on(element!(App).render_loop())?;
    Ok(())
}
