use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use kotoba_core::time::fixed_clock;
use services::{AppServices, LessonService, LessonSessionLoader, UserService, VocabularyService};
use storage::demo::{demo_storage, seed_demo};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::dashboard::DashboardTestHandles;
use crate::views::lesson::LessonTestHandles;
use crate::views::{
    AddLessonView, AddVocabularyView, EditLessonView, EditVocabularyView, LessonView, LessonsView,
    ManageLessonsView, ManageUsersView, ManageVocabularyView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn admin_email(&self) -> String {
        "admin@example.com".to_owned()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn vocabulary(&self) -> Arc<VocabularyService> {
        self.services.vocabulary()
    }

    fn users(&self) -> Arc<UserService> {
        self.services.users()
    }

    fn session_loader(&self) -> Arc<LessonSessionLoader> {
        self.services.session_loader()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Lessons,
    Lesson(String),
    ManageLessons,
    AddLesson,
    EditLesson(String),
    ManageVocabulary,
    AddVocabulary,
    EditVocabulary(String),
    ManageUsers,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    lesson_handles: LessonTestHandles,
    dashboard_handles: DashboardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.lesson_handles.clone());
    use_context_provider(|| props.dashboard_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Lesson(id) => rsx! { LessonView { id } },
        ViewKind::ManageLessons => rsx! { ManageLessonsView {} },
        ViewKind::AddLesson => rsx! { AddLessonView {} },
        ViewKind::EditLesson(id) => rsx! { EditLessonView { id } },
        ViewKind::ManageVocabulary => rsx! { ManageVocabularyView {} },
        ViewKind::AddVocabulary => rsx! { AddVocabularyView {} },
        ViewKind::EditVocabulary(id) => rsx! { EditVocabularyView { id } },
        ViewKind::ManageUsers => rsx! { ManageUsersView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub lesson_handles: LessonTestHandles,
    pub dashboard_handles: DashboardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then give pending resources a few chances to resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.pump().await;
    }

    pub async fn pump(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// In-memory storage holding the demo lessons, vocabulary and accounts.
pub async fn seeded_storage() -> Storage {
    let now = fixed_clock().now();
    let storage = demo_storage(now).expect("demo accounts");
    seed_demo(&storage, now).await.expect("seed demo lessons");
    storage
}

/// Harness over the seeded demo content.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, seeded_storage().await)
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::new(&storage, fixed_clock());
    let lesson_handles = LessonTestHandles::default();
    let dashboard_handles = DashboardTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            view,
            lesson_handles: lesson_handles.clone(),
            dashboard_handles: dashboard_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        lesson_handles,
        dashboard_handles,
    }
}

/// Id of the seeded lesson with the given number.
pub async fn lesson_id_for(storage: &Storage, number: u32) -> String {
    storage
        .lessons
        .list_lessons()
        .await
        .expect("list lessons")
        .into_iter()
        .find(|lesson| lesson.number().value() == number)
        .map(|lesson| lesson.id().to_string())
        .expect("seeded lesson")
}
