use iocraft::prelude::*;
use iocraft_hooks::prelude::*;

#[component]
fn Notes(mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let saved = hooks.use_local_storage("notes", Vec::<String>::new);
    let mut notes = hooks.use_array({
        let saved = saved.clone();
        move || saved.get()
    });
    let mut draft = hooks.use_state(String::new);
    let mut show_help = hooks.use_toggle(false);
    let mut should_exit = hooks.use_toggle(false);

    hooks.use_key_down(move |event| match event.code {
        KeyCode::Char(c) => {
            let mut value = draft.read().to_string();
            value.push(c);
            draft.set(value);
        }
        KeyCode::Backspace => {
            let mut value = draft.read().to_string();
            value.pop();
            draft.set(value);
        }
        KeyCode::Enter => {
            let value = draft.read().trim().to_string();
            if !value.is_empty() {
                notes.push(value);
            }
            draft.set(String::new());
        }
        KeyCode::Delete => {
            notes.remove(0);
        }
        KeyCode::Tab => show_help.toggle(),
        KeyCode::Esc => should_exit.on(),
        _ => {}
    });

    // Persist whenever the list changes, but not for the value we just loaded.
    let current = notes.to_vec();
    hooks.use_update_effect(
        {
            let mut saved = saved.clone();
            let current = current.clone();
            move || saved.set(current)
        },
        current.clone(),
    );

    if should_exit.get() {
        system.exit();
    }

    element! {
        View(
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: Color::Yellow,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: format!("{} notes, stored under {:?}", current.len(), saved.key()), weight: Weight::Bold)
            #(current.iter().enumerate().map(|(i, note)| element! {
                Text(content: format!("{}. {}", i + 1, note))
            }))
            Text(content: format!("> {}", draft.read().as_str()), color: Color::Green)
            #(show_help.get().then(|| element! {
                Text(content: "Enter: add note, Delete: remove oldest, Tab: help, Esc: exit", color: Color::Grey)
            }))
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let path = std::env::temp_dir().join("iocraft-hooks-notes.json");
    let storage = LocalStorage::open(&path)?;
    log::info!("notes are stored in {}", path.display());

    smol::block_on(
        element! {
            ContextProvider(value: Context::owned(storage)) {
                Notes
            }
        }
        .render_loop(),
    )?;
    Ok(())
}
