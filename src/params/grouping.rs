use crate::params::model::{Namespace, Parameter};

/// Parameters sharing one `#ifdef` guard, in declaration order.
#[derive(Debug, Clone)]
pub struct GuardGroup<'a> {
    pub guard: Option<&'a str>,
    pub params: Vec<&'a Parameter>,
}

/// Parameters sharing one namespace, in declaration order.
#[derive(Debug, Clone)]
pub struct NamespaceGroup<'a> {
    pub namespace: &'a Namespace,
    pub params: Vec<&'a Parameter>,
}

/// Stable partition by guard: the unguarded parameters come first as a single
/// group, then one group per distinct guard in the order guards first appear.
/// No empty groups are produced.
pub fn group_by_guard<'a, I>(params: I) -> Vec<GuardGroup<'a>>
where
    I: IntoIterator<Item = &'a Parameter>,
{
    let mut unguarded = GuardGroup { guard: None, params: Vec::new() };
    let mut guarded: Vec<GuardGroup<'a>> = Vec::new();

    for param in params {
        match param.guard.as_deref() {
            None => unguarded.params.push(param),
            Some(guard) => match guarded.iter_mut().find(|g| g.guard == Some(guard)) {
                Some(group) => group.params.push(param),
                None => guarded.push(GuardGroup {
                    guard: Some(guard),
                    params: vec![param],
                }),
            },
        }
    }

    let mut groups = Vec::with_capacity(guarded.len() + 1);
    if !unguarded.params.is_empty() {
        groups.push(unguarded);
    }
    groups.extend(guarded);
    groups
}

/// Groups parameters by namespace name, in first-seen order.
pub fn group_by_namespace<'a, I>(params: I) -> Vec<NamespaceGroup<'a>>
where
    I: IntoIterator<Item = &'a Parameter>,
{
    let mut groups: Vec<NamespaceGroup<'a>> = Vec::new();

    for param in params {
        match groups
            .iter_mut()
            .find(|g| g.namespace.name == param.namespace.name)
        {
            Some(group) => group.params.push(param),
            None => groups.push(NamespaceGroup {
                namespace: &param.namespace,
                params: vec![param],
            }),
        }
    }

    groups
}

/// Appends `body` to `out`, wrapped in `#ifdef guard` / `#endif` when guarded.
pub fn write_guarded(out: &mut String, guard: Option<&str>, body: &str) {
    match guard {
        Some(symbol) => {
            out.push_str(&format!("#ifdef {}\n", symbol));
            out.push_str(body);
            out.push_str("#endif\n");
        }
        None => out.push_str(body),
    }
}
