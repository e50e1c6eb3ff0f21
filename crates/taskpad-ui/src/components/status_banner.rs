use taskpad_core::Notice;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::app::format::notice_text;

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
  pub message:           Option<String>,
  pub notices:           Vec<Notice>,
  pub on_dismiss:        Callback<()>,
  pub on_dismiss_notice: Callback<u64>
}

#[function_component(StatusBanner)]
pub fn status_banner(
  props: &StatusBannerProps
) -> Html {
  let message = props.message.as_ref().map(|message| {
    let on_dismiss = props.on_dismiss.clone();
    html! {
        <div class="banner ok">
            <span>{ message }</span>
            <button type="button" class="btn" onclick={move |_| on_dismiss.emit(())}>{ "×" }</button>
        </div>
    }
  });

  html! {
      <div class="banners">
          { message.unwrap_or_default() }
          {
              for props.notices.iter().map(|notice| {
                  let on_dismiss = props.on_dismiss_notice.clone();
                  let id = notice.id;
                  html! {
                      <div key={id} class="banner error">
                          <span>{ notice_text(notice) }</span>
                          <button type="button" class="btn" onclick={move |_| on_dismiss.emit(id)}>{ "×" }</button>
                      </div>
                  }
              })
          }
      </div>
  }
}
