use anyhow::{Context, anyhow};
use dioxus::{
    html::FileData,
    logger::tracing::{info, warn},
    prelude::*,
};

use crate::{
    Route,
    api::{ApiHandle, UploadFile},
    config::MODEL_CHOICES,
    state::{CreateForm, StateCell, SubmitOutcome, create},
};

/// Reads every picked file into memory so it can go into the multipart body.
async fn read_selection(picked: Vec<FileData>) -> anyhow::Result<Vec<UploadFile>> {
    let mut files = vec![];
    for file in picked {
        let name = file.name();
        let bytes = file
            .read_bytes()
            .await
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("could not read {name}"))?;
        files.push(UploadFile {
            name,
            bytes: bytes.to_vec(),
        });
    }
    Ok(files)
}

#[component]
pub fn Create() -> Element {
    let api = use_context::<ApiHandle>();
    let nav = navigator();
    let form: Signal<CreateForm> = use_signal(CreateForm::default);

    let on_files = move |e: Event<FormData>| async move {
        let picked = e.files();
        if picked.is_empty() {
            return;
        }
        match read_selection(picked).await {
            Ok(files) => form.mutate(|f| f.set_files(files)),
            Err(err) => {
                warn!("file selection failed: {err:?}");
                form.mutate(|f| f.error = Some(format!("Error reading files: {err}")));
            }
        }
    };

    let on_submit = move |_e: Event<MouseData>| {
        let api = api.clone();
        async move {
            if let SubmitOutcome::Created(c) = create::submit(&*api, &form).await {
                info!("created {}", c.name);
                nav.push(Route::Home {});
            }
        }
    };

    let CreateForm {
        rag_name,
        model_name,
        files,
        submitting,
        error,
    } = form.read().clone();
    let disabled = if submitting { Some(true) } else { None };

    rsx! {
        div { class: "create-container",
            h2 { "Create a New RAG System" }
            if let Some(error) = error {
                div { class: "error-message", "{error}" }
            }
            div { class: "form-group",
                label { r#for: "ragName", "RAG Name:" }
                input {
                    id: "ragName",
                    r#type: "text",
                    placeholder: "Enter a name for your RAG",
                    value: "{rag_name}",
                    oninput: move |e: Event<FormData>| form.mutate(|f| f.rag_name = e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "modelName", "Model:" }
                select {
                    id: "modelName",
                    value: "{model_name}",
                    onchange: move |e: Event<FormData>| form.mutate(|f| f.model_name = e.value()),
                    for m in MODEL_CHOICES {
                        option { value: m, selected: m == model_name, "{m}" }
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "files", "Documents:" }
                input {
                    id: "files",
                    r#type: "file",
                    multiple: true,
                    onchange: on_files,
                }
                div { class: "file-list",
                    for f in files.iter() {
                        div { class: "file-item", "{f.name}" }
                    }
                }
            }
            button {
                class: "submit-button",
                disabled,
                onclick: on_submit,
                if submitting {
                    "Creating..."
                } else {
                    "Create RAG"
                }
            }
        }
    }
}
