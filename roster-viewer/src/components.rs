pub use searchbar::SearchBar;
pub use profilecard::ProfileCard;
pub use profiletable::ProfileTable;

mod searchbar {
    use yew::prelude::*;
    use yew::events::{InputEvent, MouseEvent, SubmitEvent};
    use web_sys::HtmlInputElement;
    use wasm_bindgen::{JsCast, UnwrapThrowExt};
    use crate::{AppContext, AppAction};

    #[derive(Clone, PartialEq, Properties)]
    pub struct Props {
        /// Live, not-yet-committed input text
        pub value: String,
        /// Committed terms, shown as removable chips
        pub terms: Vec<String>,
    }

    #[function_component(SearchBar)]
    pub fn search_bar(props: &Props) -> Html {
        let state = use_context::<AppContext>().unwrap();

        let oninput = {
            let state = state.clone();
            move |e: InputEvent| {
                let target = e.target().unwrap_throw();
                let target: HtmlInputElement = target.dyn_into().unwrap_throw();
                state.dispatch(AppAction::InputChanged(target.value()));
            }
        };

        let onsubmit = {
            let state = state.clone();
            move |e: SubmitEvent| {
                e.prevent_default();
                state.dispatch(AppAction::CommitTerm);
            }
        };

        html! {
            <div id="search">
                { for props.terms.iter().enumerate().map(|(index, term)| {
                    let onclick = {
                        let state = state.clone();
                        move |_: MouseEvent| state.dispatch(AppAction::RemoveTerm(index))
                    };
                    html! {
                        <span class="search-term" key={index}>
                            { term.clone() }
                            <button type="button" class="search-term-remove" {onclick}>{"×"}</button>
                        </span>
                    }
                }) }
                <form {onsubmit}>
                    <input type="search" placeholder="Search profiles" value={props.value.clone()} {oninput} />
                    <button type="submit">{"Search"}</button>
                </form>
            </div>
        }
    }
}

mod profilecard;
mod profiletable;
