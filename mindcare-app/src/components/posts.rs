use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mindcare_core::ListScreen;
use mindcare_core::models::Post;

use crate::api;
use crate::components::guard::RequireSession;
use crate::state::SessionStore;

#[component]
pub(crate) fn PostsPage() -> impl IntoView {
    view! {
        <RequireSession>
            <PostsContent />
        </RequireSession>
    }
}

#[component]
fn PostsContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let screen = RwSignal::new(ListScreen::<Post>::new());
    let draft = RwSignal::new(String::new());

    if let Some(token) = store.token() {
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::fetch_posts(&token).await {
                Ok(posts) => screen.update(|s| s.loaded(posts)),
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to fetch posts")))
                }
            }
        });
    }

    let on_create = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(token) = store.token() else {
            return;
        };
        let content = draft.get();
        screen.update(|s| s.begin());
        spawn_local(async move {
            match api::create_post(&token, &content).await {
                Ok(created) => {
                    screen.update(|s| s.created(created));
                    draft.set(String::new());
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to create post")))
                }
            }
        });
    };

    view! {
        <section class="page-panel">
            <h2>"Post Management"</h2>

            <Show when=move || screen.with(|s| s.error.is_some())>
                <div class="error-banner">
                    {move || screen.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <form class="post-form" on:submit=on_create>
                <textarea
                    placeholder="Write a post..."
                    required=true
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || screen.with(|s| s.loading)>"Post"</button>
            </form>

            <div class="post-list">
                <For
                    each=move || screen.with(|s| s.items.clone())
                    key=|post| {
                        (
                            post.id.clone(),
                            post.comments.len(),
                            post.recommendation.as_ref().map(|rec| rec.content.clone()),
                        )
                    }
                    children=move |post| view! { <PostCard post=post screen=screen /> }
                />
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: Post, screen: RwSignal<ListScreen<Post>>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let comment_draft = RwSignal::new(String::new());
    let recommendation_draft = RwSignal::new(String::new());
    let post_id = post.id.clone();

    let on_comment = {
        let post_id = post_id.clone();
        move |_| {
            let Some(token) = store.token() else {
                return;
            };
            let post_id = post_id.clone();
            let content = comment_draft.get();
            spawn_local(async move {
                match api::add_comment(&token, &post_id, &content).await {
                    Ok(updated) => {
                        let id = updated.id.clone();
                        screen.update(|s| {
                            s.replaced(|p| p.id == id, updated);
                        });
                    }
                    Err(err) => {
                        screen.update(|s| s.failed(err.user_message("Failed to add comment")))
                    }
                }
            });
        }
    };

    // Кнопка живёт внутри `Show`, поэтому обработчик завёрнут в Callback.
    let on_recommend = Callback::new(move |_: ()| {
        let Some(token) = store.token() else {
            return;
        };
        let post_id = post_id.clone();
        let text = recommendation_draft.get();
        spawn_local(async move {
            match api::add_recommendation(&token, &post_id, &text).await {
                Ok(updated) => {
                    let id = updated.id.clone();
                    screen.update(|s| {
                        s.replaced(|p| p.id == id, updated);
                    });
                }
                Err(err) => {
                    screen.update(|s| s.failed(err.user_message("Failed to add recommendation")))
                }
            }
        });
    });

    view! {
        <article class="post-card">
            <p>
                <strong>{post.author_name().to_string()}</strong>
                ": "
                {post.content.clone()}
            </p>

            {post
                .recommendation
                .as_ref()
                .map(|rec| {
                    view! {
                        <p class="recommendation">
                            <strong>"Recommendation:"</strong>
                            " "
                            {rec.content.clone()}
                            <small>{format!(" by {}", rec.author_name())}</small>
                        </p>
                    }
                })}

            <div class="comments">
                {post
                    .comments
                    .iter()
                    .map(|comment| {
                        view! {
                            <p class="comment">
                                <strong>{comment.author_name().to_string()}</strong>
                                ": "
                                {comment.content.clone()}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="comment-box">
                <input
                    placeholder="Add a comment..."
                    prop:value=move || comment_draft.get()
                    on:input=move |ev| comment_draft.set(event_target_value(&ev))
                />
                <button on:click=on_comment disabled=move || screen.with(|s| s.loading)>
                    "Comment"
                </button>
            </div>

            <Show when=move || store.is_psychiatrist()>
                <div class="recommendation-box">
                    <input
                        placeholder="Add a recommendation..."
                        prop:value=move || recommendation_draft.get()
                        on:input=move |ev| recommendation_draft.set(event_target_value(&ev))
                    />
                    <button
                        on:click=move |_| on_recommend.run(())
                        disabled=move || screen.with(|s| s.loading)
                    >
                        "Add Recommendation"
                    </button>
                </div>
            </Show>
        </article>
    }
}
