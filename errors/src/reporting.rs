use ariadne::FnCache;

use crate::Error;

use std::fmt::Debug;

#[allow(clippy::ptr_arg)]
fn provider(x: &String) -> Result<String, Box<(dyn Debug + 'static)>> {
    if x == "<native>" {
        Ok("Error originated from native context".to_owned())
    } else {
        std::fs::read_to_string(x).map_err(|x| Box::new(x) as Box<(dyn Debug + 'static)>)
    }
}

pub fn report(e: Error) {
    e.finish().eprint(FnCache::new(provider)).unwrap();
}
