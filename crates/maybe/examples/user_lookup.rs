use maybe::{all, from_nullable, Maybe, Nullable};

struct User {
    name: &'static str,
    active: bool,
    email: Option<&'static str>,
}

fn fetch_user(id: u32) -> Option<User> {
    match id {
        1 => Some(User {
            name: "Alice",
            active: true,
            email: Some("alice@example.com"),
        }),
        2 => Some(User {
            name: "Bob",
            active: false,
            email: None,
        }),
        _ => None,
    }
}

fn main() {
    for id in [1, 2, 3] {
        let name = from_nullable(fetch_user(id))
            .filter(|u| u.active)
            .map(|u| u.name)
            .get_or_else("anonymous");
        println!("user {id}: {name}");
    }

    // Both fields must be present to build a contact line.
    let contact: Maybe<String> = from_nullable(fetch_user(1))
        .chain(|u| all((Maybe::Just(u.name), from_nullable(u.email))))
        .map(|(name, email)| format!("{name} <{email}>"));
    println!("contact: {}", contact.get_or_else("none".into()));

    let unset: Nullable<&str> = Nullable::Undefined;
    println!("unset is present: {}", from_nullable(unset).is_just());
}
