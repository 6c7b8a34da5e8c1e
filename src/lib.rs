/*!
# Observer Registry

Subscribe/unsubscribe bookkeeping for the observer pattern. A subject owns an
`ObserverRegistry` over its observer capability type and exposes the
two-method `Observable` contract to the parties interested in its events.

The registry holds its entries weakly and identifies observers by allocation,
so an observer dropped elsewhere disappears from the live set without any
explicit unsubscribe, and re-registering a tracked observer leaves the set
unchanged.

Delivering events to the registered observers is left to the subject; this
crate only answers "who is listening right now".

# Usage

```
use observer_registry::registry::ObserverRegistry;
use std::sync::Arc;

trait Listener {
    fn on_change(&self);
}

struct PrintListener;
impl Listener for PrintListener {
    fn on_change(&self) {
        println!("changed");
    }
}

let mut registry: ObserverRegistry<dyn Listener> = ObserverRegistry::new();
let listener: Arc<dyn Listener> = Arc::new(PrintListener);

registry.register_observer(&listener);
assert_eq!(registry.len(), 1);

registry.remove_observer(&listener);
assert!(registry.is_empty());
```
*/
pub mod observable;
pub mod registry;
