use maybe::{from_nullable, Maybe};

#[derive(Clone, Debug)]
struct User {
    name: String,
    active: bool,
}

fn fetch_user(id: u32) -> Option<User> {
    match id {
        1 => Some(User {
            name: "Alice".into(),
            active: true,
        }),
        2 => Some(User {
            name: "Bob".into(),
            active: false,
        }),
        _ => None,
    }
}

fn display_name(id: u32) -> String {
    from_nullable(fetch_user(id))
        .filter(|u| u.active)
        .map(|u| u.name)
        .get_or_else("anonymous".to_string())
}

#[test]
fn active_user_resolves_to_name() {
    assert_eq!(display_name(1), "Alice");
}

#[test]
fn missing_user_is_anonymous() {
    assert_eq!(display_name(404), "anonymous");
}

#[test]
fn inactive_user_is_anonymous() {
    assert_eq!(display_name(2), "anonymous");
}

#[test]
fn lookups_compose_with_chain() {
    let manager_of = |u: User| -> Maybe<User> {
        let manager = if u.name == "Bob" {
            fetch_user(1)
        } else {
            None
        };
        from_nullable(manager)
    };
    let boss = from_nullable(fetch_user(2)).chain(manager_of).map(|u| u.name);
    assert_eq!(boss, Maybe::Just("Alice".to_string()));

    let nobody = from_nullable(fetch_user(1)).chain(manager_of);
    assert!(nobody.is_nothing());
}
