use http::Method;
use routedraw::{
    draw, DispatchResolver, DrawConfig, DrawError, ResourceOptions, RestAction, RouteSet,
    RouteTable, Target, TargetDescriptor,
};

fn verbs_and_paths(routes: &RouteSet) -> Vec<(Method, String, String)> {
    routes
        .iter()
        .map(|r| (r.method.clone(), r.path.clone(), r.action().to_string()))
        .collect()
}

fn row(method: Method, path: &str, action: &str) -> (Method, String, String) {
    (method, path.to_string(), action.to_string())
}

#[test]
fn test_resources_expands_seven_routes_in_order() {
    let routes = RouteSet::draw(|r| r.resources("posts", |_| Ok(()))).unwrap();

    assert_eq!(
        verbs_and_paths(&routes),
        vec![
            row(Method::GET, "/posts", "index"),
            row(Method::GET, r"/posts/:id(\d+)", "show"),
            row(Method::GET, "/posts/new", "new"),
            row(Method::POST, "/posts", "create"),
            row(Method::GET, r"/posts/:id(\d+)/edit", "edit"),
            row(Method::PUT, r"/posts/:id(\d+)", "update"),
            row(Method::DELETE, r"/posts/:id(\d+)", "destroy"),
        ]
    );
    assert!(routes.iter().all(|r| r.controller() == "posts"));
    assert!(routes.iter().all(|r| r.namespace().is_empty()));
}

#[test]
fn test_only_restricts_and_wins_over_except() {
    let routes = RouteSet::draw(|r| {
        r.resources_with(
            "posts",
            ResourceOptions::new()
                .only([RestAction::Index, RestAction::Show])
                .except([RestAction::Index, RestAction::Show]),
            |_| Ok(()),
        )
    })
    .unwrap();

    assert_eq!(
        verbs_and_paths(&routes),
        vec![
            row(Method::GET, "/posts", "index"),
            row(Method::GET, r"/posts/:id(\d+)", "show"),
        ]
    );
}

#[test]
fn test_except_omits_actions() {
    let routes = RouteSet::draw(|r| {
        r.resources_with(
            "posts",
            ResourceOptions::new().except([RestAction::Destroy]),
            |_| Ok(()),
        )
    })
    .unwrap();

    assert_eq!(routes.len(), 6);
    assert!(routes.iter().all(|r| r.action() != "destroy"));
    assert!(routes.find(&Method::DELETE, r"/posts/:id(\d+)").is_none());
}

#[test]
fn test_controller_override() {
    let routes = RouteSet::draw(|r| {
        r.resources_with(
            "photos",
            ResourceOptions::new()
                .controller("images")
                .only([RestAction::Index]),
            |photos| photos.member(|m| m.get("preview")),
        )
    })
    .unwrap();

    assert_eq!(routes.entries()[0].path, "/photos");
    assert_eq!(routes.entries()[0].handler.handler_name, "images#index");
    assert_eq!(routes.entries()[1].handler.handler_name, "images#preview");
}

#[test]
fn test_nested_resources_use_parent_member_prefix() {
    let routes = RouteSet::draw(|r| {
        r.resources("posts", |posts| posts.resources("comments", |_| Ok(())))
    })
    .unwrap();

    assert_eq!(routes.len(), 14);
    let comments: Vec<_> = routes.iter().filter(|r| r.controller() == "comments").collect();
    assert_eq!(comments.len(), 7);
    for route in &comments {
        assert!(
            route.path.starts_with(r"/posts/:post_id(\d+)/comments"),
            "unexpected path {}",
            route.path
        );
    }
    assert!(routes
        .find(&Method::GET, r"/posts/:post_id(\d+)/comments/:id(\d+)/edit")
        .is_some());
    assert!(routes.iter().all(|r| !r.path.starts_with("/posts/comments")));
}

#[test]
fn test_deeply_nested_resources() {
    let routes = RouteSet::draw(|r| {
        r.namespace("api", |api| {
            api.resources_with(
                "categories",
                ResourceOptions::new().only([RestAction::Index]),
                |cats| {
                    cats.resources_with(
                        "posts",
                        ResourceOptions::new().only([RestAction::Index]),
                        |posts| {
                            posts.resources_with(
                                "comments",
                                ResourceOptions::new().only([RestAction::Index]),
                                |_| Ok(()),
                            )
                        },
                    )
                },
            )
        })
    })
    .unwrap();

    assert_eq!(
        routes.path_patterns(),
        vec![
            "/api/categories".to_string(),
            r"/api/categories/:category_id(\d+)/posts".to_string(),
            r"/api/categories/:category_id(\d+)/posts/:post_id(\d+)/comments".to_string(),
        ]
    );
    // Nested resources keep the enclosing namespace chain in their targets.
    assert!(routes.iter().all(|r| r.namespace() == ["api"]));
}

#[test]
fn test_member_and_collection_actions() {
    let routes = RouteSet::draw(|r| {
        r.resources("posts", |posts| {
            posts.member(|m| m.post("publish"))?;
            posts.collection(|c| {
                c.get("search")?;
                c.del("purge")
            })
        })
    })
    .unwrap();

    assert_eq!(routes.len(), 10);
    let publish = routes.find(&Method::POST, r"/posts/:id(\d+)/publish").unwrap();
    assert_eq!(publish.controller(), "posts");
    assert_eq!(publish.action(), "publish");

    let search = routes.find(&Method::GET, "/posts/search").unwrap();
    assert_eq!(search.action(), "search");
    let purge = routes.find(&Method::DELETE, "/posts/purge").unwrap();
    assert_eq!(purge.action(), "purge");
}

#[test]
fn test_member_routes_on_nested_resource() {
    let routes = RouteSet::draw(|r| {
        r.resources_with(
            "posts",
            ResourceOptions::new().only(Vec::<RestAction>::new()),
            |posts| {
                posts.resources_with(
                    "comments",
                    ResourceOptions::new().only(Vec::<RestAction>::new()),
                    |comments| comments.member(|m| m.patch("approve")),
                )
            },
        )
    })
    .unwrap();

    assert_eq!(
        routes.path_patterns(),
        vec![r"/posts/:post_id(\d+)/comments/:id(\d+)/approve".to_string()]
    );
}

#[test]
fn test_resource_namespace_option() {
    let routes = RouteSet::draw(|r| {
        r.namespace("api", |api| {
            api.resources_with(
                "users",
                ResourceOptions::new()
                    .namespace("admin")
                    .only([RestAction::Show]),
                |users| users.member(|m| m.put("lock")),
            )
        })
    })
    .unwrap();

    assert_eq!(routes.entries()[0].path, r"/api/admin/users/:id(\d+)");
    assert_eq!(routes.entries()[0].namespace(), ["api", "admin"]);
    assert_eq!(routes.entries()[0].handler.handler_name, "api::admin::users#show");
    assert_eq!(routes.entries()[1].path, r"/api/admin/users/:id(\d+)/lock");
    assert_eq!(routes.entries()[1].namespace(), ["api", "admin"]);
}

#[test]
fn test_options_are_not_shared_between_siblings() {
    let shared = ResourceOptions::new()
        .namespace("admin")
        .only([RestAction::Index]);

    let routes = RouteSet::draw(|r| {
        r.resources_with("posts", shared.clone(), |_| Ok(()))?;
        r.resources_with("pages", shared.clone(), |_| Ok(()))?;
        r.resources_with("tags", ResourceOptions::new().only([RestAction::Index]), |_| Ok(()))
    })
    .unwrap();

    assert_eq!(
        routes.path_patterns(),
        vec!["/admin/posts", "/admin/pages", "/tags"]
    );
    assert_eq!(routes.entries()[1].controller(), "pages");
    assert_eq!(shared.namespace.as_deref(), Some("admin"));
    assert!(shared.controller.is_none());
}

#[test]
fn test_shorthand_target() {
    let routes = RouteSet::draw(|r| r.get("/users/:id", "users#show")).unwrap();
    let entry = &routes.entries()[0];
    assert_eq!(entry.controller(), "users");
    assert_eq!(entry.action(), "show");
}

#[test]
fn test_error_leaves_earlier_routes_registered() {
    let mut routes = RouteSet::new();
    let result = draw(
        &mut routes,
        &routedraw::NamedResolver,
        &DrawConfig::default(),
        |r| {
            r.get("/ok", "pages#ok")?;
            r.resources("posts", |posts| posts.get("x", "broken"))?;
            r.get("/never", "pages#never")
        },
    );

    assert!(matches!(result, Err(DrawError::MalformedTarget { .. })));
    // Everything up to the failing declaration stays registered.
    assert_eq!(routes.len(), 8);
    assert!(routes.find(&Method::GET, "/never").is_none());
}

/// Table that only records what it was handed
#[derive(Default)]
struct Recorder {
    routes: Vec<(Method, String, String)>,
}

impl RouteTable for Recorder {
    type Handler = String;

    fn add_route(&mut self, method: Method, path: String, handler: String) {
        self.routes.push((method, path, handler));
    }
}

/// Resolver numbering handlers by how many routes the table already holds
struct Numbering;

impl DispatchResolver<Recorder> for Numbering {
    fn resolve(&self, descriptor: TargetDescriptor, table: &Recorder) -> String {
        format!(
            "{}:{}.{}@{}",
            table.routes.len(),
            descriptor.controller,
            descriptor.action,
            descriptor.namespace.join("/")
        )
    }
}

#[test]
fn test_custom_table_and_resolver() {
    let mut table = Recorder::default();
    draw(&mut table, &Numbering, &DrawConfig::default(), |r| {
        r.namespace("admin", |a| {
            a.post("login", Target::new("sessions", "create"))?;
            a.resources_with(
                "users",
                ResourceOptions::new().only([RestAction::Index]),
                |_| Ok(()),
            )
        })
    })
    .unwrap();

    assert_eq!(
        table.routes,
        vec![
            (
                Method::POST,
                "/admin/login".to_string(),
                "0:sessions.create@admin".to_string()
            ),
            (
                Method::GET,
                "/admin/users".to_string(),
                "1:users.index@admin".to_string()
            ),
        ]
    );
}
