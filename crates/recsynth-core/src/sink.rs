//! Output sink boundary.
//!
//! Generated methods are handed to a caller-owned declaration container in
//! emission order. Each record needs its own sink when records are processed
//! in parallel.

use recsynth_ast::MethodDef;

///
/// DeclarationSink
///

pub trait DeclarationSink {
    fn push_method(&mut self, method: MethodDef);

    fn extend_methods(&mut self, methods: Vec<MethodDef>) {
        for method in methods {
            self.push_method(method);
        }
    }
}

impl DeclarationSink for Vec<MethodDef> {
    fn push_method(&mut self, method: MethodDef) {
        self.push(method);
    }

    fn extend_methods(&mut self, methods: Vec<MethodDef>) {
        self.extend(methods);
    }
}
