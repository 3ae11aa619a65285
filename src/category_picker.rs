use yew::prelude::*;

use crate::ripple::use_ripples;
use crate::types::Category;

#[derive(Properties, PartialEq)]
struct CategoryButtonProps {
    category: Category,
    selected: bool,
    on_select: Callback<Category>,
}

#[function_component(CategoryButton)]
fn category_button(props: &CategoryButtonProps) -> Html {
    let (ripple, overlay) = use_ripples();

    let onclick = {
        let on_select = props.on_select.clone();
        let category = props.category;
        Callback::from(move |event: MouseEvent| {
            ripple.emit(event);
            on_select.emit(category);
        })
    };

    html! {
        <button
            type="button"
            data-cat={props.category.token()}
            class={classes!(
                "categoria-btn",
                "relative",
                "overflow-hidden",
                "px-4",
                "py-2",
                "rounded-full",
                "border",
                props.selected.then(|| classes!("ring-2", "ring-amber-500", "bg-amber-100"))
            )}
            onclick={onclick}
        >
            { props.category.label() }
            { overlay }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    pub selected: Option<Category>,
    pub on_select: Callback<Category>,
}

/// Sibling buttons where at most one carries the selected highlight.
/// The chosen token is mirrored into a hidden field for form submission.
#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2">
            {
                Category::ALL.iter().map(|&category| {
                    html! {
                        <CategoryButton
                            key={category.token()}
                            category={category}
                            selected={props.selected == Some(category)}
                            on_select={props.on_select.clone()}
                        />
                    }
                }).collect::<Html>()
            }
            <input
                type="hidden"
                id="categoria"
                name="categoria"
                value={props.selected.map(|c| c.token()).unwrap_or_default()}
            />
        </div>
    }
}
