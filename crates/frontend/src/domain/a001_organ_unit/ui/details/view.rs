use super::view_model::OrganUnitDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_organ_unit::OrganUnitField;
use contracts::enums::nivel_jerarquico::NivelJerarquico;
use leptos::prelude::*;

#[component]
pub fn OrganUnitDetails() -> impl IntoView {
    let vm = OrganUnitDetailsViewModel::new();

    let vm_stage = vm.clone();

    view! {
        <div class="organ-unit-page">
            <div class="details-container organ-unit-details">
                <div class="details-header">
                    <h1>"Adicionar Órgano"</h1>
                </div>

                <div class="details-body">
                    {move || {
                        let vm = vm_stage.clone();
                        if vm.is_submitted()() {
                            view! { <SubmittedNotice vm=vm /> }.into_any()
                        } else {
                            view! { <OrganUnitFormFields vm=vm /> }.into_any()
                        }
                    }}
                </div>

                <div class="details-footer">
                    <p>
                        "Los campos marcados con "
                        <span class="required-mark">"*"</span>
                        " son obligatorios."
                    </p>
                </div>
            </div>
        </div>
    }
}

/// Success view shown after a clean submit
#[component]
fn SubmittedNotice(vm: OrganUnitDetailsViewModel) -> impl IntoView {
    view! {
        <div class="success-banner">
            <p class="success-title">"¡Formulario enviado con éxito!"</p>
            <p>"Los datos del órgano han sido registrados correctamente."</p>
            <button class="btn btn-success" on:click=move |_| vm.reset_command()>
                {icon("add")}
                "Agregar otro órgano"
            </button>
        </div>
    }
}

#[component]
fn OrganUnitFormFields(vm: OrganUnitDetailsViewModel) -> impl IntoView {
    let vm_clone = vm.clone();

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="denominacion">
                    "Denominación " <span class="required-mark">"*"</span>
                </label>
                <input
                    type="text"
                    id="denominacion"
                    class:has-error={
                        let vm = vm_clone.clone();
                        move || vm.field_error(OrganUnitField::Denominacion).is_some()
                    }
                    prop:value={
                        let vm = vm_clone.clone();
                        move || vm.field_value(OrganUnitField::Denominacion)
                    }
                    on:input={
                        let vm = vm_clone.clone();
                        move |ev| {
                            vm.edit_field(OrganUnitField::Denominacion, event_target_value(&ev));
                        }
                    }
                    placeholder="Ingrese la denominación"
                />
                {
                    let vm = vm_clone.clone();
                    move || {
                        vm.field_error(OrganUnitField::Denominacion)
                            .map(|m| view! { <p class="error-message">{m}</p> })
                    }
                }
            </div>

            <div class="form-grid">
                <div class="form-group">
                    <label for="especialidad">
                        "Especialidad " <span class="required-mark">"*"</span>
                    </label>
                    <input
                        type="text"
                        id="especialidad"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::Especialidad).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::Especialidad)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::Especialidad, event_target_value(&ev));
                            }
                        }
                        placeholder="Ingrese la especialidad"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::Especialidad)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="nivel_jerarquico">
                        "Nivel Jerárquico " <span class="required-mark">"*"</span>
                    </label>
                    <select
                        id="nivel_jerarquico"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::NivelJerarquico).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::NivelJerarquico)
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::NivelJerarquico, event_target_value(&ev));
                            }
                        }
                    >
                        <option value="">"Seleccione un nivel"</option>
                        {NivelJerarquico::all()
                            .into_iter()
                            .map(|nivel| {
                                view! { <option value=nivel.code()>{nivel.display_name()}</option> }
                            })
                            .collect_view()}
                    </select>
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::NivelJerarquico)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="abreviatura">
                        "Abreviatura " <span class="required-mark">"*"</span>
                    </label>
                    <input
                        type="text"
                        id="abreviatura"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::Abreviatura).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::Abreviatura)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::Abreviatura, event_target_value(&ev));
                            }
                        }
                        placeholder="Ej: CAR"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::Abreviatura)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="orden">
                        "Orden " <span class="required-mark">"*"</span>
                    </label>
                    <input
                        type="number"
                        id="orden"
                        min="1"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::Orden).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::Orden)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::Orden, event_target_value(&ev));
                            }
                        }
                        placeholder="Número de orden"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::Orden)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="fecha_inicio">
                        "Fecha inicio " <span class="required-mark">"*"</span>
                    </label>
                    <input
                        type="date"
                        id="fecha_inicio"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::FechaInicio).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::FechaInicio)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::FechaInicio, event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::FechaInicio)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>

                <div class="form-group">
                    <label for="fecha_fin">"Fecha fin"</label>
                    <input
                        type="date"
                        id="fecha_fin"
                        class:has-error={
                            let vm = vm_clone.clone();
                            move || vm.field_error(OrganUnitField::FechaFin).is_some()
                        }
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::FechaFin)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::FechaFin, event_target_value(&ev));
                            }
                        }
                    />
                    {
                        let vm = vm_clone.clone();
                        move || {
                            vm.field_error(OrganUnitField::FechaFin)
                                .map(|m| view! { <p class="error-message">{m}</p> })
                        }
                    }
                </div>
            </div>

            <div class="form-group">
                <label for="descripcion">"Descripción"</label>
                <div class="editor-frame">
                    // Toolbar decorativa: los botones no están cableados
                    <div class="editor-toolbar">
                        <button type="button" class="toolbar-btn bold">"B"</button>
                        <button type="button" class="toolbar-btn italic">"I"</button>
                        <button type="button" class="toolbar-btn underline">"U"</button>
                        <button type="button" class="toolbar-btn">"T"<sup>"2"</sup></button>
                        <button type="button" class="toolbar-btn">"T"<sub>"2"</sub></button>
                        <button type="button" class="toolbar-btn">"L"</button>
                        <button type="button" class="toolbar-btn bold">"m"</button>
                        <button type="button" class="toolbar-btn bold">"n"</button>
                        <button type="button" class="toolbar-btn bold">"e"</button>
                    </div>
                    <textarea
                        id="descripcion"
                        class="editor-textarea"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.field_value(OrganUnitField::Descripcion)
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.edit_field(OrganUnitField::Descripcion, event_target_value(&ev));
                            }
                        }
                        placeholder="Escriba una descripción del órgano..."
                        rows="4"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.reset_command()
                    }
                >
                    {icon("cancel")}
                    "Limpiar"
                </button>
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.submit_command()
                    }
                >
                    {icon("save")}
                    "Guardar Órgano"
                </button>
            </div>
        </div>
    }
}
