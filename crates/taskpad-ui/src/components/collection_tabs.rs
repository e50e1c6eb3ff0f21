use taskpad_core::Collection;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use crate::app::format::count_label;

#[derive(Properties, PartialEq)]
pub struct CollectionTabsProps {
  pub active:    Collection,
  /// Snapshot sizes in
  /// [`Collection::all`] order, `None`
  /// while not loaded yet.
  pub counts:    [Option<usize>; 3],
  pub on_select: Callback<Collection>
}

#[function_component(CollectionTabs)]
pub fn collection_tabs(
  props: &CollectionTabsProps
) -> Html {
  html! {
      <div class="tabs">
          {
              for Collection::all().into_iter().zip(props.counts).map(|(collection, count)| {
                  let on_select = props.on_select.clone();
                  let active = props.active == collection;
                  html! {
                      <button
                          type="button"
                          class={classes!("tab", active.then_some("active"))}
                          onclick={move |_| on_select.emit(collection)}
                      >
                          { collection.label() }
                          <span class="badge">{ count_label(count) }</span>
                      </button>
                  }
              })
          }
      </div>
  }
}
