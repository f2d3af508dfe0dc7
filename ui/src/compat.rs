// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::eip1193::Eip1193;
    use api::eip1193::ProviderError;
    use js_sys::Function;
    use js_sys::Promise;
    use js_sys::Reflect;
    use js_sys::JSON;
    use serde_json::Value;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    /// The `window.ethereum` object a wallet extension injects into the page.
    #[derive(Clone)]
    pub struct BrowserWallet {
        ethereum: JsValue,
    }

    /// Returns the injected wallet, if the browser has one.
    pub fn detect_wallet() -> Option<BrowserWallet> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(BrowserWallet { ethereum })
    }

    impl Eip1193 for BrowserWallet {
        async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
            let args = serde_json::json!({ "method": method, "params": params });
            let args = JSON::parse(&args.to_string()).map_err(|e| transport_error(&e))?;

            let request: Function = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
                .map_err(|e| transport_error(&e))?
                .dyn_into()
                .map_err(|_| ProviderError::Transport("ethereum.request is not a function".to_string()))?;

            let promise: Promise = request
                .call1(&self.ethereum, &args)
                .map_err(|e| rpc_error(&e))?
                .dyn_into()
                .map_err(|_| ProviderError::Transport("ethereum.request did not return a promise".to_string()))?;

            let result = JsFuture::from(promise).await.map_err(|e| rpc_error(&e))?;
            if result.is_undefined() || result.is_null() {
                return Ok(Value::Null);
            }

            let text: String = JSON::stringify(&result)
                .map_err(|e| transport_error(&e))?
                .into();
            serde_json::from_str(&text).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
        }
    }

    /// Wallets reject with `{ code, message }`; anything else is a transport failure.
    fn rpc_error(err: &JsValue) -> ProviderError {
        let code = Reflect::get(err, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64());
        let message = Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{:?}", err));

        match code {
            Some(code) => ProviderError::Rpc {
                code: code as i64,
                message,
            },
            None => ProviderError::Transport(message),
        }
    }

    fn transport_error(err: &JsValue) -> ProviderError {
        ProviderError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::eip1193::Eip1193;
    use api::eip1193::ProviderError;
    use serde_json::Value;

    /// Wallet extensions only exist inside a browser, so outside of one there
    /// is never a value of this type.
    #[derive(Clone)]
    pub enum BrowserWallet {}

    pub fn detect_wallet() -> Option<BrowserWallet> {
        None
    }

    impl Eip1193 for BrowserWallet {
        async fn request(&self, _method: &str, _params: Value) -> Result<Value, ProviderError> {
            match *self {}
        }
    }
}
