use std::collections::HashMap;

use leonardo::{
    CalculateApiCostRequest, Client, ClientBuilder, CreateDatasetRequest,
    CreateTextureGenerationRequest, ImprovePromptRequest, LcmGenerationRequest, LcmInpaintingRequest, LcmUpscaleRequest, MotionRequest,
    Pagination, TrainCustomModelRequest, UniversalUpscalerRequest, UpdateCustomModelRequest,
    UploadCanvasInitAndMaskImageRequest, UploadDatasetImageRequest, UploadGeneratedImageRequest,
    UploadInitImageRequest, VariationRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    ClientBuilder::new()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

async fn mount(server: &MockServer, verb: &str, route: &str, body: serde_json::Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn dataset_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/datasets"))
        .and(body_json(json!({ "name": "portraits" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "insert_datasets_one": { "id": "ds-1" } })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "GET",
        "/datasets/ds-1",
        json!({ "datasets_by_pk": {
            "id": "ds-1",
            "name": "portraits",
            "createdAt": "2024-03-01T10:00:00.000",
            "dataset_images": [{ "id": "di-1", "url": "https://cdn.example/di-1.png" }]
        }}),
    )
    .await;
    mount(
        &server,
        "POST",
        "/datasets/ds-1/upload",
        json!({ "uploadDatasetImage": {
            "fields": "{\"key\":\"k\",\"policy\":\"p\"}",
            "id": "di-2",
            "key": "k",
            "url": "https://bucket.example/"
        }}),
    )
    .await;
    mount(
        &server,
        "POST",
        "/datasets/ds-1/upload/gen",
        json!({ "uploadDatasetImageFromGen": { "id": "di-3" } }),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/datasets/ds-1",
        json!({ "delete_datasets_by_pk": { "id": "ds-1" } }),
    )
    .await;

    let client = client_for(&server);

    let created = client
        .create_dataset(&CreateDatasetRequest::new("portraits"))
        .await
        .unwrap();
    assert_eq!(created.insert_datasets_one.id.as_deref(), Some("ds-1"));

    let dataset = client.get_dataset("ds-1").await.unwrap().datasets_by_pk.unwrap();
    assert_eq!(dataset.name.as_deref(), Some("portraits"));
    assert_eq!(dataset.dataset_images.len(), 1);

    let upload = client
        .upload_dataset_image(
            "ds-1",
            &UploadDatasetImageRequest {
                extension: "png".into(),
            },
        )
        .await
        .unwrap()
        .upload_dataset_image
        .unwrap();
    assert_eq!(upload.fields["policy"], "p");
    assert_eq!(upload.id.as_deref(), Some("di-2"));

    let from_gen = client
        .upload_generated_image_to_dataset(
            "ds-1",
            &UploadGeneratedImageRequest {
                generated_image_id: "img-9".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        from_gen.upload_dataset_image_from_gen.unwrap().id.as_deref(),
        Some("di-3")
    );

    let deleted = client.delete_dataset("ds-1").await.unwrap();
    assert_eq!(deleted.delete_datasets_by_pk.unwrap().id.as_deref(), Some("ds-1"));
}

#[tokio::test]
async fn custom_model_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models"))
        .and(body_json(json!({
            "name": "my-model",
            "datasetId": "ds-1",
            "instance_prompt": "a photo of sks",
            "sd_Version": "SDXL_1_0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sdTrainingJob": { "customModelId": "cm-1", "apiCreditCost": 500 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "GET",
        "/models/cm-1",
        json!({ "custom_models_by_pk": {
            "id": "cm-1",
            "name": "my-model",
            "status": "COMPLETE",
            "type": "GENERAL"
        }}),
    )
    .await;
    Mock::given(method("PUT"))
        .and(path("/models/cm-1"))
        .and(body_json(json!({ "name": "renamed" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "updated_custom_models_by_pk": { "id": "cm-1", "name": "renamed" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "DELETE",
        "/models/cm-1",
        json!({ "delete_custom_models_by_pk": { "id": "cm-1" } }),
    )
    .await;

    let client = client_for(&server);

    let job = client
        .train_custom_model(&TrainCustomModelRequest {
            name: "my-model".into(),
            dataset_id: "ds-1".into(),
            instance_prompt: "a photo of sks".into(),
            sd_version: Some("SDXL_1_0".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.sd_training_job.custom_model_id.as_deref(), Some("cm-1"));
    assert_eq!(job.sd_training_job.api_credit_cost, Some(500));

    let model = client.get_custom_model("cm-1").await.unwrap().custom_models_by_pk.unwrap();
    assert_eq!(model.model_type.as_deref(), Some("GENERAL"));

    let updated = client
        .update_custom_model(
            "cm-1",
            &UpdateCustomModelRequest {
                name: Some("renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        updated.updated_custom_models_by_pk.unwrap().name.as_deref(),
        Some("renamed")
    );

    let deleted = client.delete_custom_model("cm-1").await.unwrap();
    assert!(deleted.delete_custom_models_by_pk.is_some());
}

#[tokio::test]
async fn platform_models_and_elements() {
    let server = MockServer::start().await;
    mount(
        &server,
        "GET",
        "/platformModels",
        json!({ "custom_models": [{ "id": "pm-1", "name": "Leonardo Diffusion XL" }] }),
    )
    .await;
    mount(
        &server,
        "GET",
        "/elements",
        json!({ "loras": [{
            "akUUID": "el-1",
            "name": "Crystalline",
            "weightDefault": 1,
            "weightMax": 1.5,
            "weightMin": -1
        }]}),
    )
    .await;

    let client = client_for(&server);

    let models = client
        .list_platform_models(Pagination::new(5, 10))
        .await
        .unwrap();
    assert_eq!(models.custom_models[0].id.as_deref(), Some("pm-1"));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=5&offset=10"));

    let elements = client.list_elements().await.unwrap();
    let lora = &elements.loras[0];
    assert_eq!(lora.ak_uuid.as_deref(), Some("el-1"));
    assert_eq!(lora.weight_max, Some(1.5));
    assert_eq!(lora.weight_min, Some(-1.0));
}

#[tokio::test]
async fn init_image_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/init-image"))
        .and(body_json(json!({ "image_file": "", "extension": "jpg" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uploadInitImage": {
                "fields": "{\"key\":\"init/abc.jpg\"}",
                "id": "init-1",
                "key": "init/abc.jpg",
                "url": "https://bucket.example/"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "GET",
        "/init-image/init-1",
        json!({ "init_images_by_pk": { "id": "init-1", "url": "https://cdn.example/init.jpg" } }),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/init-image/init-1",
        json!({ "delete_init_images_by_pk": { "id": "init-1" } }),
    )
    .await;
    mount(
        &server,
        "POST",
        "/canvas-init-image",
        json!({ "uploadCanvasInitImage": {
            "initFields": "{\"key\":\"i\"}",
            "initImageId": "ci-1",
            "maskFields": "{\"key\":\"m\"}",
            "maskImageId": "cm-1"
        }}),
    )
    .await;

    let client = client_for(&server);

    let resp = client
        .upload_init_image(&UploadInitImageRequest {
            extension: Some("jpg".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let target = resp.upload_init_image.unwrap();
    assert_eq!(target.fields["key"], "init/abc.jpg");

    let image = client.get_init_image("init-1").await.unwrap().init_images_by_pk.unwrap();
    assert_eq!(image.url.as_deref(), Some("https://cdn.example/init.jpg"));

    let deleted = client.delete_init_image("init-1").await.unwrap();
    assert!(deleted.delete_init_images_by_pk.is_some());

    let canvas = client
        .upload_canvas_init_and_mask_image(&UploadCanvasInitAndMaskImageRequest {
            init_extension: "png".into(),
            mask_extension: "png".into(),
        })
        .await
        .unwrap()
        .upload_canvas_init_image
        .unwrap();
    assert_eq!(canvas.mask_image_id.as_deref(), Some("cm-1"));
    assert_eq!(canvas.mask_form_fields().unwrap()["key"], "m");
}

#[tokio::test]
async fn variation_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/variations/unzoom"))
        .and(body_json(json!({ "id": "img-1", "isVariation": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sdUnzoomJob": { "id": "var-1", "apiCreditCost": 5 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/variations/upscale"))
        .and(body_json(json!({ "id": "img-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sdUpscaleJob": { "id": "var-2" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "POST",
        "/variations/nobg",
        json!({ "sdNobgJob": { "id": "var-3" } }),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/variations/universal-upscaler"))
        .and(body_json(json!({ "image_url": "https://cdn.example/a.png", "scale_factor": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upscaled_image_url": "https://cdn.example/a@2x.png"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "GET",
        "/variations/var-3",
        json!({ "generated_image_variation_generic": [{
            "id": "var-3",
            "status": "COMPLETE",
            "transformType": "NOBG",
            "url": "https://cdn.example/nobg.png"
        }]}),
    )
    .await;

    let client = client_for(&server);

    let unzoom = client
        .create_unzoom_variation(&VariationRequest {
            id: "img-1".into(),
            is_variation: Some(false),
        })
        .await
        .unwrap();
    assert_eq!(unzoom.sd_unzoom_job.id.as_deref(), Some("var-1"));
    assert_eq!(unzoom.sd_unzoom_job.api_credit_cost, Some(5));

    let upscale = client
        .create_upscale_variation(&VariationRequest::new("img-1"))
        .await
        .unwrap();
    assert_eq!(upscale.sd_upscale_job.id.as_deref(), Some("var-2"));

    let nobg = client
        .create_no_background_variation(&VariationRequest::new("img-1"))
        .await
        .unwrap();
    assert_eq!(nobg.sd_nobg_job.id.as_deref(), Some("var-3"));

    let universal = client
        .create_universal_upscaler_variation(&UniversalUpscalerRequest {
            image_url: "https://cdn.example/a.png".into(),
            scale_factor: 2,
        })
        .await
        .unwrap();
    assert_eq!(
        universal.upscaled_image_url.as_deref(),
        Some("https://cdn.example/a@2x.png")
    );

    let detail = client.get_variation("var-3").await.unwrap();
    let variation = &detail.generated_image_variation_generic[0];
    assert_eq!(variation.transform_type, Some(leonardo::TransformType::NoBackground));
    assert_eq!(variation.status, Some(leonardo::GenerationStatus::Complete));
}

#[tokio::test]
async fn motion_generation_sends_empty_object_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generations-motion-svd"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "motionSvdGenerationJob": { "generationId": "gen-m", "apiCreditCost": 25 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client_for(&server)
        .create_svd_motion_generation(&MotionRequest::default())
        .await
        .unwrap();
    let job = resp.motion_svd_generation_job.unwrap();
    assert_eq!(job.generation_id.as_deref(), Some("gen-m"));
}

#[tokio::test]
async fn prompt_and_pricing_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/prompt/improve"))
        .and(body_json(json!({ "prompt": "a cat" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptGeneration": { "prompt": "a fluffy tabby cat curled on a windowsill" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/pricing-calculator"))
        .and(body_json(json!({
            "service": "IMAGE_GENERATION",
            "serviceParams": { "IMAGE_GENERATION": { "imageWidth": 512 } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "calculateProductionApiServiceCost": { "cost": 12 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let improved = client
        .improve_prompt(&ImprovePromptRequest {
            prompt: "a cat".into(),
        })
        .await
        .unwrap();
    assert!(improved
        .prompt_generation
        .unwrap()
        .prompt
        .unwrap()
        .starts_with("a fluffy"));

    let params: HashMap<String, serde_json::Value> = [(
        "IMAGE_GENERATION".to_string(),
        json!({ "imageWidth": 512 }),
    )]
    .into_iter()
    .collect();
    let cost = client
        .calculate_api_cost(&CalculateApiCostRequest {
            service: "IMAGE_GENERATION".into(),
            service_params: Some(params),
        })
        .await
        .unwrap();
    assert_eq!(cost.calculate_production_api_service_cost.cost, Some(12));
}

#[tokio::test]
async fn realtime_canvas_endpoints() {
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/generations-lcm",
        json!({ "lcmGenerationJob": { "imageDataUrl": ["data:image/png;base64,AAA"] } }),
    )
    .await;
    mount(
        &server,
        "POST",
        "/lcm-instant-refine",
        json!({ "lcmGenerationJob": { "imageDataUrl": ["data:image/png;base64,BBB"] } }),
    )
    .await;

    let client = client_for(&server);
    let req = LcmGenerationRequest {
        image_data_url: "data:image/png;base64,SKETCH".into(),
        prompt: "a boat".into(),
        ..Default::default()
    };

    let lcm = client.create_lcm_generation(&req).await.unwrap();
    assert_eq!(lcm.lcm_generation_job.unwrap().image_data_url.len(), 1);

    let refined = client.lcm_instant_refine(&req).await.unwrap();
    assert_eq!(
        refined.lcm_generation_job.unwrap().image_data_url[0],
        "data:image/png;base64,BBB"
    );
}

#[tokio::test]
async fn canvas_inpainting_and_alchemy_upscale() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lcm-inpainting"))
        .and(body_json(json!({
            "imageDataUrl": "data:image/png;base64,IMG",
            "maskDataUrl": "data:image/png;base64,MASK",
            "prompt": "a red door",
            "steps": 8
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lcmGenerationJob": { "imageDataUrl": ["data:image/png;base64,OUT"], "apiCreditCost": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "POST",
        "/lcm-upscale",
        json!({ "lcmGenerationJob": {
            "imageDataUrl": ["data:image/png;base64,UP"],
            "generatedImageId": "img-up",
            "generationId": ["gen-up"],
            "variationId": ["var-up"]
        }}),
    )
    .await;

    let client = client_for(&server);

    let inpainted = client
        .lcm_inpainting(&LcmInpaintingRequest {
            image_data_url: "data:image/png;base64,IMG".into(),
            mask_data_url: "data:image/png;base64,MASK".into(),
            prompt: "a red door".into(),
            steps: Some(8),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(inpainted.lcm_generation_job.unwrap().api_credit_cost, Some(2));

    let upscaled = client
        .lcm_alchemy_upscale(&LcmUpscaleRequest {
            image_data_url: "data:image/png;base64,IMG".into(),
            prompt: "a red door".into(),
            ..Default::default()
        })
        .await
        .unwrap()
        .lcm_generation_job
        .unwrap();
    assert_eq!(upscaled.generated_image_id.as_deref(), Some("img-up"));
    assert_eq!(upscaled.generation_id, vec!["gen-up".to_string()]);
    assert_eq!(upscaled.variation_id, vec!["var-up".to_string()]);
}

#[tokio::test]
async fn three_d_model_endpoints() {
    let server = MockServer::start().await;
    mount(
        &server,
        "POST",
        "/generations-texture",
        json!({ "textureGenerationJob": { "id": "tex-1", "apiCreditCost": 10 } }),
    )
    .await;
    mount(
        &server,
        "GET",
        "/models-3d/user/user-1",
        json!({ "model_assets": [{ "id": "m3d-1", "name": "teapot" }] }),
    )
    .await;
    mount(
        &server,
        "GET",
        "/models-3d/m3d-1",
        json!({ "model_assets_by_pk": { "id": "m3d-1", "name": "teapot" } }),
    )
    .await;
    mount(
        &server,
        "DELETE",
        "/models-3d/m3d-1",
        json!({ "delete_model_assets_by_pk": { "id": "m3d-1" } }),
    )
    .await;

    let client = client_for(&server);

    let job = client
        .create_texture_generation(&CreateTextureGenerationRequest {
            model_asset_id: Some("m3d-1".into()),
            prompt: Some("weathered bronze".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.texture_generation_job.id.as_deref(), Some("tex-1"));

    let listed = client
        .list_3d_models_by_user("user-1", Pagination::default())
        .await
        .unwrap();
    assert_eq!(listed.model_assets.len(), 1);

    let asset = client.get_3d_model("m3d-1").await.unwrap().model_assets_by_pk.unwrap();
    assert_eq!(asset.name.as_deref(), Some("teapot"));

    let deleted = client.delete_3d_model("m3d-1").await.unwrap();
    assert!(deleted.delete_model_assets_by_pk.is_some());
}
