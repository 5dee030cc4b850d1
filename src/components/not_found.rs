use crate::navigation::{NotFoundContent, intent_callback};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let content = NotFoundContent::standard();

    let actions = content
        .actions()
        .iter()
        .map(|target| {
            let onclick = intent_callback(navigator.clone(), *target);
            html! {
                <button {onclick} class="btn btn-back">
                    {target.label()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div style="text-align: center; padding: 50px; font-family: sans-serif;">
            <h1>{content.heading()}</h1>
            <p>{content.message()}</p>
            {actions}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[function_component(RoutedNotFound)]
    fn routed_not_found() -> Html {
        html! {
            <Router history={AnyHistory::from(MemoryHistory::new())}>
                <NotFound />
            </Router>
        }
    }

    async fn render_routed() -> String {
        tokio::task::LocalSet::new()
            .run_until(
                LocalServerRenderer::<RoutedNotFound>::new()
                    .hydratable(false)
                    .render(),
            )
            .await
    }

    #[tokio::test]
    async fn test_renders_heading_message_and_two_actions() {
        let html = render_routed().await;

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<p").count(), 1);
        assert_eq!(html.matches("<button").count(), 2);
        assert!(html.contains("<h1>404 - Page Not Found</h1>"));
    }

    #[tokio::test]
    async fn test_actions_in_display_order() {
        let html = render_routed().await;

        let home = html.find("Go Home").unwrap();
        let reserve = html.find("Make Reservation").unwrap();
        assert!(home < reserve);
    }

    #[tokio::test]
    async fn test_render_is_idempotent() {
        assert_eq!(render_routed().await, render_routed().await);
    }

    #[tokio::test]
    async fn test_renders_without_router() {
        let html = tokio::task::LocalSet::new()
            .run_until(LocalServerRenderer::<NotFound>::new().hydratable(false).render())
            .await;

        assert_eq!(html.matches("<button").count(), 2);
    }
}
